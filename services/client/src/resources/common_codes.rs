//! Common code client

use common::{ClientResult, Endpoint};
use tracing::info;

use crate::{
    http::{ApiRequest, HttpClient},
    models::CommonCodeGroup,
};

const FETCH_FAILED: &str = "코드 목록을 불러오는데 실패했습니다.";

/// Client for the select-input taxonomy
#[derive(Debug, Clone)]
pub struct CommonCodeClient {
    http: HttpClient,
}

impl CommonCodeClient {
    /// Create a new common code client
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Get the codes of one menu and its "other" flag
    pub async fn fetch_by_menu(&self, menu_name: &str) -> ClientResult<CommonCodeGroup> {
        info!("Fetching common codes for menu: {}", menu_name);

        self.http
            .send_json(ApiRequest::get(Endpoint::CommonCodes.template()).query("menuName", menu_name))
            .await
            .map_err(|e| e.with_fallback(FETCH_FAILED))
    }
}

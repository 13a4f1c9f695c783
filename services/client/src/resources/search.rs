//! Unified search client

use common::{ClientResult, Endpoint};
use tracing::{debug, info};

use crate::{
    http::{ApiRequest, HttpClient},
    models::SearchGroup,
};

const SEARCH_FAILED: &str = "검색에 실패했습니다.";

/// Client for the cross-content search endpoint
#[derive(Debug, Clone)]
pub struct SearchClient {
    http: HttpClient,
}

impl SearchClient {
    /// Create a new search client
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Search all content categories
    ///
    /// A blank keyword returns no groups without contacting the backend.
    pub async fn search(&self, keyword: &str) -> ClientResult<Vec<SearchGroup>> {
        let keyword = keyword.trim();
        if keyword.is_empty() {
            debug!("Skipping search for blank keyword");
            return Ok(Vec::new());
        }

        info!("Searching for: {}", keyword);
        self.http
            .send_json(ApiRequest::get(Endpoint::Search.template()).query("keyword", keyword))
            .await
            .map_err(|e| e.with_fallback(SEARCH_FAILED))
    }
}

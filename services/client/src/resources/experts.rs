//! Expert profile client
//!
//! Public listing uses the `experts` endpoints; registration and editing go
//! through the admin endpoints.

use common::{ClientResult, Endpoint};
use tracing::info;

use crate::{
    http::{ApiRequest, HttpClient},
    models::{Expert, ExpertCreate, ExpertUpdate},
};

const FETCH_ALL_FAILED: &str = "전문가 목록을 불러오는데 실패했습니다.";
const FETCH_FAILED: &str = "전문가 정보를 불러오는데 실패했습니다.";
const CREATE_FAILED: &str = "전문가 등록에 실패했습니다.";
const UPDATE_FAILED: &str = "전문가 정보 수정에 실패했습니다.";
const DELETE_FAILED: &str = "전문가 삭제에 실패했습니다.";

/// Client for expert profiles
#[derive(Debug, Clone)]
pub struct ExpertClient {
    http: HttpClient,
}

impl ExpertClient {
    /// Create a new expert client
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Get the public expert directory
    pub async fn fetch_all(&self) -> ClientResult<Vec<Expert>> {
        info!("Fetching experts");

        self.http
            .send_json(ApiRequest::get(Endpoint::Experts.template()))
            .await
            .map_err(|e| e.with_fallback(FETCH_ALL_FAILED))
    }

    /// Get every expert regardless of status (admin)
    pub async fn fetch_all_admin(&self) -> ClientResult<Vec<Expert>> {
        info!("Fetching experts for admin");

        self.http
            .send_json(ApiRequest::get(Endpoint::AdminExperts.template()))
            .await
            .map_err(|e| e.with_fallback(FETCH_ALL_FAILED))
    }

    /// Get an expert by ID
    pub async fn fetch_by_id(&self, id: i64) -> ClientResult<Expert> {
        info!("Fetching expert: {}", id);

        self.http
            .send_json(ApiRequest::get(Endpoint::Expert.with_id(id)))
            .await
            .map_err(|e| e.with_fallback(FETCH_FAILED))
    }

    /// Register an expert (admin)
    pub async fn create(&self, payload: &ExpertCreate) -> ClientResult<Expert> {
        info!("Creating expert: {}", payload.email);

        let request = ApiRequest::post(Endpoint::AdminExperts.template()).json(payload)?;
        self.http
            .send_json(request)
            .await
            .map_err(|e| e.with_fallback(CREATE_FAILED))
    }

    /// Edit an expert (admin)
    pub async fn update(&self, id: i64, payload: &ExpertUpdate) -> ClientResult<Expert> {
        info!("Updating expert: {}", id);

        let request = ApiRequest::put(Endpoint::AdminExpert.with_id(id)).json(payload)?;
        self.http
            .send_json(request)
            .await
            .map_err(|e| e.with_fallback(UPDATE_FAILED))
    }

    /// Remove an expert (admin)
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        info!("Deleting expert: {}", id);

        self.http
            .send_no_content(ApiRequest::delete(Endpoint::AdminExpert.with_id(id)))
            .await
            .map_err(|e| e.with_fallback(DELETE_FAILED))
    }
}

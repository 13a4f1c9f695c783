//! Custom program client

use common::{ClientResult, Endpoint};
use tracing::info;

use crate::{
    http::{ApiRequest, HttpClient},
    models::{CustomProgram, CustomProgramPayload},
    multipart::{Attachment, program_form},
};

const FETCH_ALL_FAILED: &str = "맞춤형 프로그램 목록을 불러오는데 실패했습니다.";
const FETCH_FAILED: &str = "맞춤형 프로그램 정보를 불러오는데 실패했습니다.";
const CREATE_FAILED: &str = "맞춤형 프로그램 등록에 실패했습니다.";
const UPDATE_FAILED: &str = "맞춤형 프로그램 수정에 실패했습니다.";
const DELETE_FAILED: &str = "맞춤형 프로그램 삭제에 실패했습니다.";

/// Client for custom (on-demand) programs
#[derive(Debug, Clone)]
pub struct CustomProgramClient {
    http: HttpClient,
}

impl CustomProgramClient {
    /// Create a new program client
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Get all programs
    pub async fn fetch_all(&self) -> ClientResult<Vec<CustomProgram>> {
        info!("Fetching custom programs");

        self.http
            .send_json(ApiRequest::get(Endpoint::CustomPrograms.template()))
            .await
            .map_err(|e| e.with_fallback(FETCH_ALL_FAILED))
    }

    /// Get a program by ID
    pub async fn fetch_by_id(&self, id: i64) -> ClientResult<CustomProgram> {
        info!("Fetching custom program: {}", id);

        self.http
            .send_json(ApiRequest::get(Endpoint::CustomProgram.with_id(id)))
            .await
            .map_err(|e| e.with_fallback(FETCH_FAILED))
    }

    /// Create a program, optionally with an attached file
    pub async fn create(
        &self,
        payload: &CustomProgramPayload,
        attachment: Option<Attachment>,
    ) -> ClientResult<CustomProgram> {
        info!("Creating custom program: {}", payload.title);

        let form = program_form(payload, attachment)?;
        self.http
            .send_json(ApiRequest::post(Endpoint::CustomPrograms.template()).multipart(form))
            .await
            .map_err(|e| e.with_fallback(CREATE_FAILED))
    }

    /// Update a program, optionally replacing its attached file
    pub async fn update(
        &self,
        id: i64,
        payload: &CustomProgramPayload,
        attachment: Option<Attachment>,
    ) -> ClientResult<CustomProgram> {
        info!("Updating custom program: {}", id);

        let form = program_form(payload, attachment)?;
        self.http
            .send_json(ApiRequest::put(Endpoint::CustomProgram.with_id(id)).multipart(form))
            .await
            .map_err(|e| e.with_fallback(UPDATE_FAILED))
    }

    /// Delete a program
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        info!("Deleting custom program: {}", id);

        self.http
            .send_no_content(ApiRequest::delete(Endpoint::CustomProgram.with_id(id)))
            .await
            .map_err(|e| e.with_fallback(DELETE_FAILED))
    }
}

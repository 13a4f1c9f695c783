//! Learning program client

use common::{ClientResult, Endpoint};
use tracing::info;

use crate::{
    http::{ApiRequest, HttpClient},
    models::{LearningProgram, ProgramPayload},
    multipart::{Attachment, program_form},
};

const FETCH_ALL_FAILED: &str = "교육 프로그램 목록을 불러오는데 실패했습니다.";
const FETCH_FAILED: &str = "교육 프로그램 정보를 불러오는데 실패했습니다.";
const CREATE_FAILED: &str = "교육 프로그램 등록에 실패했습니다.";
const UPDATE_FAILED: &str = "교육 프로그램 수정에 실패했습니다.";
const DELETE_FAILED: &str = "교육 프로그램 삭제에 실패했습니다.";

/// Client for learning programs
#[derive(Debug, Clone)]
pub struct ProgramClient {
    http: HttpClient,
}

impl ProgramClient {
    /// Create a new program client
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Get all programs
    pub async fn fetch_all(&self) -> ClientResult<Vec<LearningProgram>> {
        info!("Fetching learning programs");

        self.http
            .send_json(ApiRequest::get(Endpoint::LearningPrograms.template()))
            .await
            .map_err(|e| e.with_fallback(FETCH_ALL_FAILED))
    }

    /// Get a program by ID
    pub async fn fetch_by_id(&self, id: i64) -> ClientResult<LearningProgram> {
        info!("Fetching learning program: {}", id);

        self.http
            .send_json(ApiRequest::get(Endpoint::LearningProgram.with_id(id)))
            .await
            .map_err(|e| e.with_fallback(FETCH_FAILED))
    }

    /// Create a program, optionally with an attached file
    pub async fn create(
        &self,
        payload: &ProgramPayload,
        attachment: Option<Attachment>,
    ) -> ClientResult<LearningProgram> {
        info!("Creating learning program: {}", payload.title);

        let form = program_form(payload, attachment)?;
        self.http
            .send_json(ApiRequest::post(Endpoint::LearningPrograms.template()).multipart(form))
            .await
            .map_err(|e| e.with_fallback(CREATE_FAILED))
    }

    /// Update a program, optionally replacing its attached file
    pub async fn update(
        &self,
        id: i64,
        payload: &ProgramPayload,
        attachment: Option<Attachment>,
    ) -> ClientResult<LearningProgram> {
        info!("Updating learning program: {}", id);

        let form = program_form(payload, attachment)?;
        self.http
            .send_json(ApiRequest::put(Endpoint::LearningProgram.with_id(id)).multipart(form))
            .await
            .map_err(|e| e.with_fallback(UPDATE_FAILED))
    }

    /// Delete a program
    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        info!("Deleting learning program: {}", id);

        self.http
            .send_no_content(ApiRequest::delete(Endpoint::LearningProgram.with_id(id)))
            .await
            .map_err(|e| e.with_fallback(DELETE_FAILED))
    }
}

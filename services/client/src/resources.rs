//! Resource clients, one per backend entity
//!
//! Every client holds a clone of the shared [`HttpClient`] and is stateless
//! otherwise. Errors from the wrapper propagate unchanged; a per-operation
//! fallback message is filled in only when the backend sent no error body.

use common::ClientResult;

use crate::http::HttpClient;

pub mod auth;
pub mod common_codes;
pub mod custom_programs;
pub mod experts;
pub mod programs;
pub mod questions;
pub mod search;

pub use auth::AuthClient;
pub use common_codes::CommonCodeClient;
pub use custom_programs::CustomProgramClient;
pub use experts::ExpertClient;
pub use programs::ProgramClient;
pub use questions::QuestionClient;
pub use search::SearchClient;

/// Every resource client over one shared HTTP client
#[derive(Debug, Clone)]
pub struct ApiClient {
    pub auth: AuthClient,
    pub common_codes: CommonCodeClient,
    pub custom_programs: CustomProgramClient,
    pub experts: ExpertClient,
    pub programs: ProgramClient,
    pub questions: QuestionClient,
    pub search: SearchClient,
}

impl ApiClient {
    /// Create all clients over `http`
    pub fn new(http: HttpClient) -> Self {
        Self {
            auth: AuthClient::new(http.clone()),
            common_codes: CommonCodeClient::new(http.clone()),
            custom_programs: CustomProgramClient::new(http.clone()),
            experts: ExpertClient::new(http.clone()),
            programs: ProgramClient::new(http.clone()),
            questions: QuestionClient::new(http.clone()),
            search: SearchClient::new(http),
        }
    }

    /// Create all clients from environment configuration
    pub fn from_env() -> ClientResult<Self> {
        Ok(Self::new(HttpClient::from_env()?))
    }
}

//! Backend REST client for the MOT Club platform
//!
//! [`http::HttpClient`] issues requests and normalizes failures into
//! [`common::ClientError`]. The [`resources`] module builds one typed client
//! per backend entity on top of it.
//!
//! ```rust,no_run
//! use client::ApiClient;
//!
//! # async fn run() -> common::ClientResult<()> {
//! let api = ApiClient::from_env()?;
//! for group in api.search.search("기술경영").await? {
//!     println!("{}: {}", group.category, group.total_count);
//! }
//! # Ok(())
//! # }
//! ```

pub mod http;
pub mod models;
pub mod multipart;
pub mod resources;
pub mod validation;

pub use http::{ApiRequest, HttpClient, RequestBody};
pub use multipart::Attachment;
pub use resources::{
    ApiClient, AuthClient, CommonCodeClient, CustomProgramClient, ExpertClient, ProgramClient,
    QuestionClient, SearchClient,
};

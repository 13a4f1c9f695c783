//! Common library for the MOT Club backend client
//!
//! This crate provides the pieces shared by the client and auth crates:
//! backend configuration and URL resolution, the endpoint registry, the
//! error taxonomy, backend timestamp handling and logging setup.
//!
//! ```rust,no_run
//! use common::{ApiConfig, Endpoint};
//!
//! let config = ApiConfig::from_env();
//! let url = config.resolve_url(&Endpoint::Question.with_id(42));
//! assert!(url.ends_with("/api/questions/42"));
//! ```

pub mod config;
pub mod datetime;
pub mod endpoints;
pub mod error;
pub mod logging;

pub use config::{ApiConfig, resolve_url};
pub use endpoints::Endpoint;
pub use error::{ClientError, ClientResult};

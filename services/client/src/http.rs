//! HTTP call wrapper
//!
//! Issues one request against the backend and normalizes the outcome:
//! callers get either a success response or a [`ClientError`]. There is no
//! retry, caching or deduplication at this layer.

use common::{ApiConfig, ClientError, ClientResult};
use reqwest::{
    Client, Method, Response, StatusCode,
    header::{ACCEPT, HeaderMap, HeaderName, HeaderValue},
    multipart::Form,
};
use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;
use tracing::{debug, info, warn};

const MAX_ERROR_MESSAGE_CHARS: usize = 500;

/// Body of an outgoing request
#[derive(Debug, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    /// Serialized with `Content-Type: application/json`
    Json(Value),
    /// Sent as-is; the transport writes the multipart boundary header
    Multipart(Form),
}

/// A request against a backend path
#[derive(Debug)]
pub struct ApiRequest {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    body: RequestBody,
    headers: HeaderMap,
}

impl ApiRequest {
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: RequestBody::Empty,
            headers: HeaderMap::new(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Append a query parameter; the value is URL-encoded on send
    pub fn query(mut self, key: &str, value: impl ToString) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    /// Attach a JSON body
    pub fn json<T: Serialize + ?Sized>(mut self, payload: &T) -> ClientResult<Self> {
        let value = serde_json::to_value(payload)
            .map_err(|e| ClientError::Payload(format!("Failed to encode request body: {}", e)))?;
        self.body = RequestBody::Json(value);
        Ok(self)
    }

    /// Attach a multipart body
    pub fn multipart(mut self, form: Form) -> Self {
        self.body = RequestBody::Multipart(form);
        self
    }

    /// Add an extra header, replacing any default of the same name
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Shared HTTP client for the backend REST API
///
/// Cheap to clone; clones share the connection pool and cookie store.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    config: ApiConfig,
}

impl HttpClient {
    /// Build a client with the configured per-request deadline
    pub fn new(config: ApiConfig) -> ClientResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .cookie_store(true)
            .build()
            .map_err(|e| ClientError::Configuration(format!("Failed to build HTTP client: {}", e)))?;

        info!(
            "HTTP client initialized for {} (timeout {:?})",
            config.base_url, config.timeout
        );
        Ok(Self { client, config })
    }

    /// Build a client from environment configuration
    pub fn from_env() -> ClientResult<Self> {
        Self::new(ApiConfig::from_env())
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Issue one request from its parts
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        body: RequestBody,
        headers: Option<HeaderMap>,
    ) -> ClientResult<Response> {
        let mut request = ApiRequest::new(method, path);
        request.body = body;
        if let Some(headers) = headers {
            request.headers = headers;
        }
        self.send(request).await
    }

    /// Issue one request, failing on transport errors and non-2xx statuses
    pub async fn send(&self, request: ApiRequest) -> ClientResult<Response> {
        let ApiRequest {
            method,
            path,
            query,
            body,
            headers,
        } = request;
        let url = self.config.resolve_url(&path);
        debug!("{} {}", method, url);

        let mut builder = self
            .client
            .request(method.clone(), &url)
            .header(ACCEPT, "application/json");

        if !query.is_empty() {
            builder = builder.query(&query);
        }

        builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Multipart(form) => builder.multipart(form),
        };

        let response = builder
            .headers(headers)
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        // An unreadable error body is treated as an empty one.
        let body = response.text().await.unwrap_or_default();
        warn!("{} {} failed with status {}", method, url, status);
        Err(request_failed(status, &body))
    }

    /// Issue a request and decode the success body
    pub async fn send_json<T: DeserializeOwned>(&self, request: ApiRequest) -> ClientResult<T> {
        let response = self.send(request).await?;
        let bytes = response.bytes().await.map_err(map_transport_error)?;
        decode(&bytes)
    }

    /// GET a path and decode the success body
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        self.send_json(ApiRequest::get(path)).await
    }

    /// Issue a request whose success body is irrelevant
    pub async fn send_no_content(&self, request: ApiRequest) -> ClientResult<()> {
        let response = self.send(request).await?;
        response.bytes().await.map_err(map_transport_error)?;
        Ok(())
    }
}

/// Decode a success body into a typed entity
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> ClientResult<T> {
    serde_json::from_slice(bytes).map_err(|e| {
        ClientError::Schema(format!(
            "Unexpected response for {}: {}",
            std::any::type_name::<T>(),
            e
        ))
    })
}

fn map_transport_error(error: reqwest::Error) -> ClientError {
    if error.is_timeout() {
        ClientError::Timeout(error.to_string())
    } else {
        ClientError::Transport(error.to_string())
    }
}

fn request_failed(status: StatusCode, body: &str) -> ClientError {
    ClientError::RequestFailed {
        status: status.as_u16(),
        status_text: status.canonical_reason().unwrap_or_default().to_string(),
        message: extract_message(body),
    }
}

/// Pull a human-readable message out of an error body
///
/// JSON bodies contribute their `message` or `error` field; other non-empty
/// bodies are used as plain text.
fn extract_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }

    let message = match serde_json::from_str::<Value>(body) {
        Ok(Value::Object(fields)) => ["message", "error"]
            .iter()
            .filter_map(|key| fields.get(*key).and_then(Value::as_str))
            .map(str::trim)
            .find(|text| !text.is_empty())
            .map(str::to_string),
        Ok(Value::String(text)) if !text.trim().is_empty() => Some(text.trim().to_string()),
        Ok(_) => None,
        Err(_) => Some(body.to_string()),
    };

    message.map(|text| text.chars().take(MAX_ERROR_MESSAGE_CHARS).collect())
}

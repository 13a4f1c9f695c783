//! Authentication client

use common::{ClientResult, Endpoint};
use tracing::info;

use crate::{
    http::{ApiRequest, HttpClient},
    models::{LoginCredentials, PasswordResetConfirm, PasswordResetRequest, User},
};

const LOGIN_FAILED: &str = "이메일 또는 비밀번호가 올바르지 않습니다.";
const LOGOUT_FAILED: &str = "로그아웃 처리에 실패했습니다.";
const RESET_REQUEST_FAILED: &str = "비밀번호 재설정 메일 발송에 실패했습니다.";
const RESET_FAILED: &str = "비밀번호 재설정에 실패했습니다.";

/// Client for login, logout and password reset
#[derive(Debug, Clone)]
pub struct AuthClient {
    http: HttpClient,
}

impl AuthClient {
    /// Create a new auth client
    pub fn new(http: HttpClient) -> Self {
        Self { http }
    }

    /// Log in and return the authenticated user
    pub async fn login(&self, credentials: &LoginCredentials) -> ClientResult<User> {
        info!("Login attempt for user: {}", credentials.email);

        let request = ApiRequest::post(Endpoint::Login.template()).json(credentials)?;
        self.http
            .send_json(request)
            .await
            .map_err(|e| e.with_fallback(LOGIN_FAILED))
    }

    /// Tell the backend the current session ended
    pub async fn logout(&self) -> ClientResult<()> {
        info!("Logout request");

        self.http
            .send_no_content(ApiRequest::post(Endpoint::Logout.template()))
            .await
            .map_err(|e| e.with_fallback(LOGOUT_FAILED))
    }

    /// Ask for a password reset mail
    pub async fn request_password_reset(&self, email: &str) -> ClientResult<()> {
        info!("Password reset requested for: {}", email);

        let payload = PasswordResetRequest {
            email: email.trim().to_string(),
        };
        let request = ApiRequest::post(Endpoint::PasswordResetRequest.template()).json(&payload)?;
        self.http
            .send_no_content(request)
            .await
            .map_err(|e| e.with_fallback(RESET_REQUEST_FAILED))
    }

    /// Set a new password with a reset token
    pub async fn reset_password(&self, payload: &PasswordResetConfirm) -> ClientResult<()> {
        info!("Password reset submitted");

        let request = ApiRequest::post(Endpoint::PasswordReset.template()).json(payload)?;
        self.http
            .send_no_content(request)
            .await
            .map_err(|e| e.with_fallback(RESET_FAILED))
    }
}

//! Backend notification on logout

use async_trait::async_trait;
use client::AuthClient;
use common::ClientResult;

/// Tells the backend that the user logged out
#[async_trait]
pub trait LogoutNotifier: Send + Sync {
    async fn notify_logout(&self) -> ClientResult<()>;
}

#[async_trait]
impl LogoutNotifier for AuthClient {
    async fn notify_logout(&self) -> ClientResult<()> {
        self.logout().await
    }
}

//! Login and logout against a stub backend

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use anyhow::Result;
use auth::{
    ChannelNavigator, MemoryStorage, SessionConfig, SessionStatus, SessionStorage, SessionStore,
};
use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use client::{ApiClient, HttpClient, models::LoginCredentials};
use common::{ApiConfig, ClientError};
use serde_json::{Value, json};
use tokio::{net::TcpListener, sync::mpsc::UnboundedReceiver};

#[derive(Clone)]
struct Backend {
    logout_status: StatusCode,
    logout_calls: Arc<AtomicUsize>,
}

async fn login(Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    if body["password"] == "Mot!2024club" {
        (
            StatusCode::OK,
            Json(json!({
                "id": 7,
                "email": body["email"],
                "name": "홍길동",
                "role": "USER"
            })),
        )
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({})))
    }
}

async fn logout(State(backend): State<Backend>) -> StatusCode {
    backend.logout_calls.fetch_add(1, Ordering::SeqCst);
    backend.logout_status
}

async fn spawn_backend(logout_status: StatusCode) -> Result<(String, Arc<AtomicUsize>)> {
    common::logging::init();

    let calls = Arc::new(AtomicUsize::new(0));
    let router = Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", post(logout))
        .with_state(Backend {
            logout_status,
            logout_calls: calls.clone(),
        });

    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    tokio::spawn(async move {
        let _ = axum::serve(listener, router).await;
    });

    Ok((format!("http://{}", addr), calls))
}

async fn closed_origin() -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let addr = listener.local_addr()?;
    drop(listener);
    Ok(format!("http://{}", addr))
}

struct Session {
    api: ApiClient,
    store: SessionStore,
    storage: MemoryStorage,
    routes: UnboundedReceiver<String>,
}

fn session(origin: &str) -> Result<Session> {
    let api = ApiClient::new(HttpClient::new(ApiConfig::new(origin))?);
    let storage = MemoryStorage::new();
    let (navigator, routes) = ChannelNavigator::new();
    let store = SessionStore::new(
        Arc::new(storage.clone()),
        Arc::new(navigator),
        Arc::new(api.auth.clone()),
        SessionConfig::default(),
    );

    Ok(Session {
        api,
        store,
        storage,
        routes,
    })
}

fn credentials(password: &str) -> LoginCredentials {
    LoginCredentials {
        email: "hong@motclub.kr".to_string(),
        password: password.to_string(),
    }
}

#[tokio::test]
async fn test_login_then_logout() -> Result<()> {
    let (origin, logout_calls) = spawn_backend(StatusCode::OK).await?;
    let mut session = session(&origin)?;
    session.store.init().await;
    assert_eq!(session.store.state().status(), SessionStatus::Anonymous);

    let user = session.api.auth.login(&credentials("Mot!2024club")).await?;
    session.store.login(user.clone()).await;
    assert_eq!(session.store.current_user(), Some(user));
    assert_eq!(session.routes.recv().await.as_deref(), Some("/"));

    session.store.logout().await;
    assert_eq!(logout_calls.load(Ordering::SeqCst), 1);
    assert_eq!(session.store.current_user(), None);
    assert_eq!(session.storage.get("user").await?, None);
    assert_eq!(session.routes.recv().await.as_deref(), Some("/login"));
    Ok(())
}

#[tokio::test]
async fn test_rejected_login_leaves_session_anonymous() -> Result<()> {
    let (origin, _) = spawn_backend(StatusCode::OK).await?;
    let session = session(&origin)?;
    session.store.init().await;

    let error = session
        .api
        .auth
        .login(&credentials("wrong"))
        .await
        .expect_err("bad password");
    assert!(matches!(error, ClientError::RequestFailed { status: 401, .. }));
    assert_eq!(session.store.state().status(), SessionStatus::Anonymous);
    Ok(())
}

#[tokio::test]
async fn test_logout_clears_session_when_backend_fails() -> Result<()> {
    let (origin, logout_calls) = spawn_backend(StatusCode::INTERNAL_SERVER_ERROR).await?;
    let session = session(&origin)?;

    let user = session.api.auth.login(&credentials("Mot!2024club")).await?;
    session.store.login(user).await;
    session.store.logout().await;

    assert_eq!(logout_calls.load(Ordering::SeqCst), 1);
    assert_eq!(session.store.current_user(), None);
    assert!(!session.store.state().is_logging_out);
    assert_eq!(session.storage.get("user").await?, None);
    Ok(())
}

#[tokio::test]
async fn test_logout_clears_session_when_backend_is_down() -> Result<()> {
    let origin = closed_origin().await?;
    let session = session(&origin)?;

    let record = json!({"id": 7, "email": "hong@motclub.kr", "name": "홍길동", "role": "USER"});
    session.storage.set("user", &record.to_string()).await?;
    assert_eq!(session.store.init().await.status(), SessionStatus::Authenticated);

    session.store.logout().await;
    assert_eq!(session.store.current_user(), None);
    assert_eq!(session.storage.get("user").await?, None);
    Ok(())
}

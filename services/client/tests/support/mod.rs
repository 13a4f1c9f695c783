//! In-process stand-in for the backend REST API

#![allow(dead_code)]

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use std::time::Duration;

use axum::Router;
use client::HttpClient;
use common::ApiConfig;
use tokio::net::TcpListener;

/// Counts requests that reached a stub handler
#[derive(Clone, Default)]
pub struct HitCounter(Arc<AtomicUsize>);

impl HitCounter {
    pub fn hit(&self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }

    pub fn count(&self) -> usize {
        self.0.load(Ordering::SeqCst)
    }
}

/// Serve `router` on an ephemeral local port and return its origin
pub async fn spawn_backend(router: Router) -> String {
    common::logging::init();

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind stub backend");
    let addr = listener.local_addr().expect("stub backend has no address");

    tokio::spawn(async move {
        axum::serve(listener, router)
            .await
            .expect("stub backend stopped");
    });

    format!("http://{}", addr)
}

/// An origin nothing is listening on
pub async fn closed_origin() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind probe listener");
    let addr = listener.local_addr().expect("probe listener has no address");
    drop(listener);
    format!("http://{}", addr)
}

pub fn http_client(origin: &str) -> HttpClient {
    HttpClient::new(ApiConfig::new(origin)).expect("failed to build client")
}

pub fn http_client_with_timeout(origin: &str, timeout: Duration) -> HttpClient {
    HttpClient::new(ApiConfig::new(origin).with_timeout(timeout)).expect("failed to build client")
}

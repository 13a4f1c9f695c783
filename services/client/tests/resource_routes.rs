//! Method, path and body sent by each resource operation

mod support;

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header::CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use client::{
    ApiClient, Attachment,
    models::{
        AnswerFormData, CustomProgramPayload, ExpertStatus, ExpertUpdate, PasswordResetConfirm,
        ProgramPayload,
    },
};
use serde_json::{Value, json};

use support::{http_client, spawn_backend};

#[derive(Debug, Clone)]
struct Recorded {
    method: String,
    path: String,
    content_type: String,
    body: String,
}

impl Recorded {
    fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap_or(Value::Null)
    }
}

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<Recorded>>>);

impl Recorder {
    fn take(&self) -> Vec<Recorded> {
        self.0
            .lock()
            .map(|mut calls| std::mem::take(&mut *calls))
            .unwrap_or_default()
    }

    fn last(&self) -> Recorded {
        self.take().pop().expect("a request was recorded")
    }
}

fn program(id: i64) -> Value {
    json!({"id": id, "title": "MOT 기초과정", "fileName": null, "filePath": null})
}

fn expert(id: i64) -> Value {
    json!({
        "id": id,
        "name": "김전문",
        "email": "expert@motclub.kr",
        "status": "ACTIVE",
        "createdAt": [2024, 1, 2, 9, 0, 0, 0],
        "updatedAt": "2024-01-05T10:00:00"
    })
}

fn question(id: i64) -> Value {
    json!({
        "id": id,
        "title": "기술가치평가",
        "content": "방법이 궁금합니다.",
        "authorEmail": "member@motclub.kr",
        "category1": "평가",
        "status": "OPEN",
        "isPublic": true,
        "createdAt": [2024, 3, 19, 14, 30, 0, 0]
    })
}

fn answer(id: i64, question_id: i64) -> Value {
    json!({
        "id": id,
        "questionId": question_id,
        "content": "TRL 평가부터 하세요.",
        "authorEmail": "expert@motclub.kr",
        "createdAt": "2024-03-20T09:00:00"
    })
}

fn id(raw: &str) -> i64 {
    raw.parse().unwrap_or_default()
}

fn respond(method: &Method, path: &str) -> Response {
    let segments: Vec<&str> = path.trim_start_matches("/api/").split('/').collect();

    match (method.as_str(), segments.as_slice()) {
        ("DELETE", _) => StatusCode::NO_CONTENT.into_response(),
        ("GET", ["learning", "programs" | "custom-programs"]) => {
            Json(json!([program(1), program(2)])).into_response()
        }
        (_, ["learning", "programs" | "custom-programs", raw]) => {
            Json(program(id(raw))).into_response()
        }
        ("GET", ["experts"] | ["admin", "experts"]) => Json(json!([expert(1)])).into_response(),
        (_, ["experts", raw] | ["admin", "experts", raw]) => Json(expert(id(raw))).into_response(),
        ("GET", ["questions", raw, "answers"]) => {
            Json(json!([answer(1, id(raw)), answer(2, id(raw))])).into_response()
        }
        ("GET", ["questions", raw]) => Json(question(id(raw))).into_response(),
        ("PUT", ["answers", raw]) => Json(answer(id(raw), 3)).into_response(),
        ("POST", ["auth", ..]) => StatusCode::OK.into_response(),
        _ => StatusCode::NOT_FOUND.into_response(),
    }
}

async fn record(
    State(recorder): State<Recorder>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let call = Recorded {
        method: method.to_string(),
        path: uri.path().to_string(),
        content_type: headers
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string(),
        body: String::from_utf8_lossy(&body).to_string(),
    };
    let response = respond(&method, &call.path);
    if let Ok(mut calls) = recorder.0.lock() {
        calls.push(call);
    }
    response
}

async fn api() -> (ApiClient, Recorder) {
    let recorder = Recorder::default();
    let router = Router::new()
        .fallback(record)
        .with_state(recorder.clone());
    let origin = spawn_backend(router).await;
    (ApiClient::new(http_client(&origin)), recorder)
}

fn assert_call(call: &Recorded, method: &str, path: &str) {
    assert_eq!(call.method, method, "method of {}", call.path);
    assert_eq!(call.path, path);
}

#[tokio::test]
async fn test_program_update_is_a_multipart_put() {
    let (api, recorder) = api().await;

    let payload = ProgramPayload {
        title: "MOT 심화과정".to_string(),
        ..Default::default()
    };
    let attachment = Attachment::new("plan.pdf", b"%PDF-1.7".to_vec())
        .with_content_type("application/pdf");
    let updated = api
        .programs
        .update(12, &payload, Some(attachment))
        .await
        .expect("update succeeds");
    assert_eq!(updated.id, 12);

    let call = recorder.last();
    assert_call(&call, "PUT", "/api/learning/programs/12");
    assert!(
        call.content_type.starts_with("multipart/form-data; boundary="),
        "{}",
        call.content_type
    );
    assert!(call.body.contains(r#"name="program""#));
    assert!(call.body.contains(r#"{"title":"MOT 심화과정"}"#));
    assert!(call.body.contains(r#"name="attachmentFile"; filename="plan.pdf""#));
    assert!(call.body.contains("%PDF-1.7"));
}

#[tokio::test]
async fn test_custom_program_update_without_attachment() {
    let (api, recorder) = api().await;

    let payload = CustomProgramPayload {
        title: "임원 대상 기술전략".to_string(),
        ..Default::default()
    };
    api.custom_programs
        .update(5, &payload, None)
        .await
        .expect("update succeeds");

    let call = recorder.last();
    assert_call(&call, "PUT", "/api/learning/custom-programs/5");
    assert!(call.content_type.starts_with("multipart/form-data"));
    assert!(call.body.contains(r#"name="program""#));
    assert!(!call.body.contains("attachmentFile"));
}

#[tokio::test]
async fn test_program_reads_and_deletes() {
    let (api, recorder) = api().await;

    assert_eq!(api.programs.fetch_all().await.expect("list").len(), 2);
    api.programs.delete(3).await.expect("delete");
    assert_eq!(api.custom_programs.fetch_all().await.expect("list").len(), 2);
    assert_eq!(api.custom_programs.fetch_by_id(8).await.expect("fetch").id, 8);
    api.custom_programs.delete(8).await.expect("delete");

    let calls = recorder.take();
    let routes: Vec<_> = calls
        .iter()
        .map(|call| (call.method.as_str(), call.path.as_str()))
        .collect();
    assert_eq!(
        routes,
        vec![
            ("GET", "/api/learning/programs"),
            ("DELETE", "/api/learning/programs/3"),
            ("GET", "/api/learning/custom-programs"),
            ("GET", "/api/learning/custom-programs/8"),
            ("DELETE", "/api/learning/custom-programs/8"),
        ]
    );
    assert!(calls.iter().all(|call| call.body.is_empty()));
}

#[tokio::test]
async fn test_expert_routes() {
    let (api, recorder) = api().await;

    assert_eq!(api.experts.fetch_all().await.expect("public list").len(), 1);
    assert_call(&recorder.last(), "GET", "/api/experts");

    assert_eq!(api.experts.fetch_all_admin().await.expect("admin list").len(), 1);
    assert_call(&recorder.last(), "GET", "/api/admin/experts");

    let expert = api.experts.fetch_by_id(4).await.expect("fetch");
    assert_eq!(expert.status, ExpertStatus::Active);
    assert_eq!(expert.updated_at.format_date(), "2024.01.05");
    assert_call(&recorder.last(), "GET", "/api/experts/4");

    let update = ExpertUpdate {
        status: Some(ExpertStatus::Inactive),
        ..Default::default()
    };
    api.experts.update(4, &update).await.expect("update");
    let call = recorder.last();
    assert_call(&call, "PUT", "/api/admin/experts/4");
    assert_eq!(call.content_type, "application/json");
    assert_eq!(call.json(), json!({"status": "INACTIVE"}));

    api.experts.delete(4).await.expect("delete");
    assert_call(&recorder.last(), "DELETE", "/api/admin/experts/4");
}

#[tokio::test]
async fn test_question_and_answer_routes() {
    let (api, recorder) = api().await;

    let fetched = api.questions.fetch_by_id(3).await.expect("fetch");
    assert_eq!(fetched.id, 3);
    assert!(fetched.updated_at.is_none());
    assert_call(&recorder.last(), "GET", "/api/questions/3");

    let answers = api.questions.fetch_answers(3).await.expect("answers");
    assert_eq!(answers.len(), 2);
    assert!(answers.iter().all(|answer| answer.question_id == 3));
    assert_call(&recorder.last(), "GET", "/api/questions/3/answers");

    let form = AnswerFormData {
        content: "사업화 로드맵을 먼저 그리세요.".to_string(),
    };
    let updated = api.questions.update_answer(8, &form).await.expect("update");
    assert_eq!(updated.id, 8);
    let call = recorder.last();
    assert_call(&call, "PUT", "/api/answers/8");
    assert_eq!(call.json(), json!({"content": "사업화 로드맵을 먼저 그리세요."}));

    api.questions.delete_answer(8).await.expect("delete");
    assert_call(&recorder.last(), "DELETE", "/api/answers/8");
}

#[tokio::test]
async fn test_password_reset_posts() {
    let (api, recorder) = api().await;

    api.auth
        .request_password_reset("  hong@motclub.kr \n")
        .await
        .expect("reset mail requested");
    let call = recorder.last();
    assert_call(&call, "POST", "/api/auth/password-reset/request");
    assert_eq!(call.content_type, "application/json");
    assert_eq!(call.json(), json!({"email": "hong@motclub.kr"}));

    let confirm = PasswordResetConfirm {
        token: "reset-token".to_string(),
        new_password: "Mot!2024club".to_string(),
    };
    api.auth.reset_password(&confirm).await.expect("password reset");
    let call = recorder.last();
    assert_call(&call, "POST", "/api/auth/password-reset");
    assert_eq!(
        call.json(),
        json!({"token": "reset-token", "newPassword": "Mot!2024club"})
    );
}

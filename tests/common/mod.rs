#![allow(dead_code)]

use std::{
    sync::{Arc, Mutex},
    time::Duration,
};

use axum::{
    body::Body,
    extract::{RawQuery, State},
    http::{Request, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use quizrelay::{cors::CorsConfig, router, trivia::TriviaClient, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Canned behavior for the fake trivia provider.
#[derive(Clone)]
pub enum Reply {
    Json(Value),
    Status(StatusCode),
    Delayed(Duration, Value),
}

#[derive(Clone)]
struct ProviderState {
    reply: Reply,
    queries: Arc<Mutex<Vec<String>>>,
}

pub struct FakeProvider {
    pub url: String,
    queries: Arc<Mutex<Vec<String>>>,
}

impl FakeProvider {
    /// Raw query strings received so far, in arrival order.
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

async fn provider_handler(
    State(state): State<ProviderState>,
    RawQuery(query): RawQuery,
) -> Response {
    state
        .queries
        .lock()
        .unwrap()
        .push(query.unwrap_or_default());

    match state.reply {
        Reply::Json(body) => Json(body).into_response(),
        Reply::Status(status) => (status, "provider unavailable").into_response(),
        Reply::Delayed(delay, body) => {
            tokio::time::sleep(delay).await;
            Json(body).into_response()
        }
    }
}

pub async fn spawn_provider(reply: Reply) -> FakeProvider {
    let queries = Arc::new(Mutex::new(Vec::new()));
    let app = Router::new()
        .route("/api.php", get(provider_handler))
        .with_state(ProviderState {
            reply,
            queries: queries.clone(),
        });

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind fake provider");
    let addr = listener.local_addr().expect("fake provider address");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("fake provider crashed");
    });

    FakeProvider {
        url: format!("http://{addr}/api.php"),
        queries,
    }
}

/// A URL nothing is listening on.
pub async fn dead_provider_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe address");
    drop(listener);
    format!("http://{addr}/api.php")
}

pub fn raw_question(n: usize) -> Value {
    json!({
        "type": "multiple",
        "difficulty": "easy",
        "category": "General Knowledge",
        "question": format!("Question {n}?"),
        "correct_answer": format!("Right {n}"),
        "incorrect_answers": [format!("Wrong {n}a"), format!("Wrong {n}b"), format!("Wrong {n}c")],
    })
}

pub fn success_payload(count: usize) -> Value {
    json!({
        "response_code": 0,
        "results": (1..=count).map(raw_question).collect::<Vec<_>>(),
    })
}

pub fn app_for(url: &str, timeout: Duration, detailed_upstream_errors: bool) -> Router {
    let trivia = TriviaClient::new(url, timeout).expect("build trivia client");
    router(
        AppState {
            trivia,
            detailed_upstream_errors,
        },
        &CorsConfig::default(),
    )
}

pub fn app(url: &str) -> Router {
    app_for(url, Duration::from_secs(5), false)
}

pub async fn send(app: Router, req: Request<Body>) -> (StatusCode, axum::http::HeaderMap, Value) {
    let resp = app.oneshot(req).await.expect("router should respond");
    let status = resp.status();
    let headers = resp.headers().clone();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, headers, body)
}

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request build should succeed");
    let (status, _, body) = send(app, req).await;
    (status, body)
}

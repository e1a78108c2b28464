use axum::{routing::get, Json, Router};

use crate::{models::MessageResponse, names, AppState};

pub fn routes() -> Router<AppState> {
    Router::new().route(names::ROOT_URL, get(homepage))
}

async fn homepage() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: names::LIVENESS_MESSAGE.to_string(),
    })
}

pub mod cors;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod names;
pub mod rejections;
pub mod trivia;

use axum::Router;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub trivia: trivia::TriviaClient,
    /// Report the provider's specific reason instead of the generic "No questions found."
    pub detailed_upstream_errors: bool,
}

pub fn router(state: AppState, cors: &cors::CorsConfig) -> Router {
    Router::new()
        .merge(handlers::homepage::routes())
        .merge(handlers::quiz::routes())
        .with_state(state)
        .layer(cors.layer())
        .layer(TraceLayer::new_for_http())
}

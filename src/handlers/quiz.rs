use axum::{extract::State, routing::get, Json, Router};

use crate::{
    extractors::QuizParams,
    models::QuizResponse,
    names,
    rejections::{AppError, ResultExt},
    trivia::QuizOutcome,
    AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(names::QUIZ_URL, get(get_quiz))
        .route(names::QUIZ_URL_NO_SLASH, get(get_quiz))
}

async fn get_quiz(
    State(state): State<AppState>,
    QuizParams(req): QuizParams,
) -> Result<Json<QuizResponse>, AppError> {
    tracing::info!(
        amount = %req.amount,
        category = ?req.category,
        difficulty = ?req.difficulty,
        "fetching quiz"
    );

    let outcome = state
        .trivia
        .quiz(&req)
        .await
        .reject("could not fetch questions from provider")?;

    match outcome {
        QuizOutcome::Questions(questions) => Ok(Json(QuizResponse { questions })),
        QuizOutcome::Empty(code) if state.detailed_upstream_errors => {
            Err(AppError::Upstream(code))
        }
        QuizOutcome::Empty(_) => Err(AppError::NoQuestions),
    }
}

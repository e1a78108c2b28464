use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};

use crate::{models::QuizRequest, rejections::AppError};

/// Extracts the quiz query parameters, turning coercion failures into a 422 `AppError::Input`.
pub struct QuizParams(pub QuizRequest);

impl<S: Send + Sync> FromRequestParts<S> for QuizParams {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(req) = Query::<QuizRequest>::from_request_parts(parts, state)
            .await
            .map_err(|e| {
                tracing::debug!("rejected quiz query: {e}");
                AppError::Input(e.body_text())
            })?;
        Ok(QuizParams(req))
    }
}

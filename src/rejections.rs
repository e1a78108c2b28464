use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::{models::ResponseCode, names, trivia::TriviaError};

#[derive(Debug)]
pub enum AppError {
    /// The provider reported a nonzero response code.
    NoQuestions,
    /// Same as `NoQuestions`, but carrying the provider's finer-grained reason.
    Upstream(ResponseCode),
    Fetch(String),
    Input(String),
}

#[derive(Serialize)]
struct ErrorBody {
    detail: String,
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::NoQuestions | AppError::Upstream(_) => StatusCode::BAD_REQUEST,
            AppError::Fetch(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Input(_) => StatusCode::UNPROCESSABLE_ENTITY,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            AppError::NoQuestions => names::NO_QUESTIONS_MESSAGE.to_string(),
            AppError::Upstream(code) => {
                format!("{} ({})", names::NO_QUESTIONS_MESSAGE, code.reason())
            }
            AppError::Fetch(reason) => names::fetch_error_message(reason),
            AppError::Input(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            detail: self.detail(),
        };
        (self.status(), Json(body)).into_response()
    }
}

pub trait ResultExt<T> {
    /// Log the failure under `msg` and surface it as a 500 carrying the underlying reason.
    fn reject(self, msg: &'static str) -> Result<T, AppError>;
}

impl<T> ResultExt<T> for Result<T, TriviaError> {
    fn reject(self, msg: &'static str) -> Result<T, AppError> {
        self.map_err(|e| {
            tracing::error!("{msg}: {e}");
            AppError::Fetch(e.to_string())
        })
    }
}

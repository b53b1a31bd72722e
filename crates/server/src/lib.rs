use api_types::error::ErrorResponse;
use axum::{Json, http::StatusCode, response::IntoResponse};
use engine::{EngineError, ValidationError};

pub use auth::{AllowAll, Authenticator, StaticToken};
pub use server::{ServerState, router, run_with_listener};

mod auth;
mod expenses;
mod server;

const INTERNAL_ERROR: &str = "internal server error";

#[derive(Debug)]
pub enum ServerError {
    Engine(EngineError),
    /// The body could not be parsed into the expected shape.
    InvalidBody,
    /// A path parameter could not be parsed.
    InvalidParams,
    Unauthorized,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::Invalid(_) => StatusCode::BAD_REQUEST,
        EngineError::NotFound { .. } => StatusCode::NOT_FOUND,
        EngineError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn message_for_engine_error(err: EngineError) -> String {
    match err {
        EngineError::Invalid(err) => err.to_string(),
        EngineError::NotFound { source, .. } => source.to_string(),
        internal @ EngineError::Internal { .. } => {
            tracing::error!("internal error: {internal}");
            INTERNAL_ERROR.to_string()
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            ServerError::Engine(err) => {
                (status_for_engine_error(&err), message_for_engine_error(err))
            }
            ServerError::InvalidBody => {
                (StatusCode::BAD_REQUEST, "invalid request body".to_string())
            }
            ServerError::InvalidParams => (StatusCode::BAD_REQUEST, "invalid params".to_string()),
            ServerError::Unauthorized => (StatusCode::UNAUTHORIZED, "unauthorized".to_string()),
        };

        let body = ErrorResponse {
            code: status.as_u16(),
            message,
        };
        (status, Json(body)).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

impl From<ValidationError> for ServerError {
    fn from(value: ValidationError) -> Self {
        Self::Engine(EngineError::Invalid(value))
    }
}

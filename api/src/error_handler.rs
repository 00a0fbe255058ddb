use ai_llm_service::AiLlmError;
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use playground_core::SweepError;
use serde::Serialize;
use thiserror::Error;

/// Public application error type.
#[derive(Debug, Error)]
pub enum AppError {
    // --- Boot / config ---
    #[error(transparent)]
    Config(AiLlmError),

    // --- IO / network / server ---
    #[error("failed to bind listener on {addr}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("server error")]
    Server(#[source] std::io::Error),

    // --- Request / routing ---
    #[error("bad request: {0}")]
    BadRequest(String),

    #[error("invalid generation config: {0}")]
    InvalidConfig(#[from] playground_core::ConfigError),

    #[error("invalid sweep: {0}")]
    InvalidSweep(#[from] SweepError),

    #[error("a sweep is already running; retry when it finishes")]
    SweepInProgress,

    #[error("sweep task failed: {0}")]
    Internal(String),

    /// Rich HTTP error mapped from lower layers with specific status & code.
    #[error("{message}")]
    Http {
        status: StatusCode,
        code: &'static str,
        message: String,
    },
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 4xx
            AppError::BadRequest(_) | AppError::InvalidConfig(_) | AppError::InvalidSweep(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::SweepInProgress => StatusCode::CONFLICT,

            // custom mapped
            AppError::Http { status, .. } => *status,

            // 5xx
            AppError::Config(_)
            | AppError::Bind { .. }
            | AppError::Server(_)
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::Config(_) => "CONFIG_ERROR",
            AppError::Bind { .. } => "BIND_ERROR",
            AppError::Server(_) => "SERVER_ERROR",
            AppError::BadRequest(_) => "BAD_REQUEST",
            AppError::InvalidConfig(_) => "INVALID_CONFIG",
            AppError::InvalidSweep(_) => "INVALID_SWEEP",
            AppError::SweepInProgress => "SWEEP_IN_PROGRESS",
            AppError::Internal(_) => "INTERNAL_ERROR",
            AppError::Http { code, .. } => code,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: String,
    code: &'a str,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_string(),
            code: self.error_code(),
        };
        (status, Json(body)).into_response()
    }
}

/// Handy result alias used across handlers.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(err: JsonRejection) -> Self {
        AppError::BadRequest(err.body_text())
    }
}

/// Generation failures keep the upstream message; the status says whose fault it was.
///
/// Upstream rate limiting passes through as 429 so clients can back off.
impl From<AiLlmError> for AppError {
    fn from(err: AiLlmError) -> Self {
        match err {
            AiLlmError::InvalidRequest(e) => AppError::InvalidConfig(e),
            AiLlmError::Config(_) => AppError::Config(err),
            AiLlmError::Timeout(_) => AppError::Http {
                status: StatusCode::GATEWAY_TIMEOUT,
                code: "UPSTREAM_TIMEOUT",
                message: err.to_string(),
            },
            AiLlmError::HttpTransport(_) => AppError::Http {
                status: StatusCode::BAD_GATEWAY,
                code: "UPSTREAM_UNREACHABLE",
                message: err.to_string(),
            },
            AiLlmError::Provider(ref e) if e.status() == Some(StatusCode::TOO_MANY_REQUESTS) => {
                AppError::Http {
                    status: StatusCode::TOO_MANY_REQUESTS,
                    code: "UPSTREAM_RATE_LIMITED",
                    message: err.to_string(),
                }
            }
            _ => AppError::Http {
                status: StatusCode::BAD_GATEWAY,
                code: "PROVIDER_ERROR",
                message: err.to_string(),
            },
        }
    }
}

use appmeta::{CodecError, StoreError, ValidationErrors};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

pub type ServerResult<T> = Result<T, ServerError>;

/// Content type of every body the catalog routes return.
pub const YAML_CONTENT_TYPE: &str = "application/yaml";

/// Server error types
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Failed to parse YAML input. This likely indicates malformed request body. Verify the payload fields and parameter types are correct.")]
    MalformedPayload(#[source] CodecError),

    #[error("Failed to validate input of the following parameters")]
    Validation(#[from] ValidationErrors),

    #[error("An application with title {0} already exists, please use a unique title.")]
    Conflict(String),

    #[error("Payload too large: max {0}MB allowed")]
    PayloadTooLarge(usize),

    #[error("Internal server error: {0}")]
    Internal(String),

    #[error("Not found")]
    NotFound,
}

/// API error response structure
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
}

impl ServerError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::BadRequest(_)
            | ServerError::MalformedPayload(_)
            | ServerError::Validation(_) => StatusCode::BAD_REQUEST,
            ServerError::Conflict(_) => StatusCode::CONFLICT,
            ServerError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ServerError::NotFound => StatusCode::NOT_FOUND,
            ServerError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get error code string
    pub fn error_code(&self) -> &'static str {
        match self {
            ServerError::BadRequest(_) => "BAD_REQUEST",
            ServerError::MalformedPayload(_) => "MALFORMED_PAYLOAD",
            ServerError::Validation(_) => "VALIDATION_FAILED",
            ServerError::Conflict(_) => "CONFLICT",
            ServerError::PayloadTooLarge(_) => "PAYLOAD_TOO_LARGE",
            ServerError::Internal(_) => "INTERNAL_ERROR",
            ServerError::NotFound => "NOT_FOUND",
        }
    }

    fn details(&self) -> Vec<String> {
        match self {
            ServerError::Validation(errors) => errors.iter().map(ToString::to_string).collect(),
            ServerError::MalformedPayload(err) => vec![err.to_string()],
            _ => Vec::new(),
        }
    }

    pub fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse {
            error: ErrorDetail {
                code: self.error_code().to_string(),
                message: self.to_string(),
                details: self.details(),
            },
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), error = %self, "request failed");
        } else {
            tracing::info!(code = self.error_code(), error = %self, "request rejected");
        }

        match serde_yaml::to_string(&self.to_error_response()) {
            Ok(body) => (status, [(header::CONTENT_TYPE, YAML_CONTENT_TYPE)], body).into_response(),
            // Fall back to the bare message so the client still sees the status.
            Err(_) => (status, self.to_string()).into_response(),
        }
    }
}

impl From<StoreError> for ServerError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Conflict { title } => ServerError::Conflict(title),
        }
    }
}

impl From<CodecError> for ServerError {
    fn from(err: CodecError) -> Self {
        match err {
            CodecError::Parse(_) => ServerError::MalformedPayload(err),
            CodecError::Encode(e) => ServerError::Internal(format!(
                "Failed to marshal search matches. This is likely a server error: {e}"
            )),
        }
    }
}

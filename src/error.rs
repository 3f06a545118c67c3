use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failures of the completion API call.
#[derive(Debug, Error)]
pub enum LlmError {
    #[error("completion request timed out")]
    Timeout,

    #[error("completion request failed: {0}")]
    Transport(String),

    #[error("completion API returned HTTP {status}: {body}")]
    Status { status: u16, body: String },

    #[error("unexpected completion response: {0}")]
    InvalidResponse(String),
}

impl LlmError {
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, LlmError::Status { status: 429, .. })
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LlmError::Timeout
        } else {
            LlmError::Transport(e.to_string())
        }
    }
}

/// Terminal failure of one explain request.
#[derive(Debug, Error)]
pub enum ExplainError {
    #[error("No text provided.")]
    NoInput,

    #[error("OCR failed.")]
    ExtractionFailed(String),

    #[error(transparent)]
    Completion(#[from] LlmError),

    #[error("Invalid JSON from LLM.")]
    MalformedOutput(String),
}

impl ExplainError {
    pub fn status(&self) -> StatusCode {
        match self {
            ExplainError::NoInput | ExplainError::ExtractionFailed(_) => StatusCode::BAD_REQUEST,
            ExplainError::MalformedOutput(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ExplainError::Completion(LlmError::Timeout) => StatusCode::GATEWAY_TIMEOUT,
            ExplainError::Completion(_) => StatusCode::BAD_GATEWAY,
        }
    }

    // what the caller sees; upstream details stay in the logs
    fn detail(&self) -> String {
        match self {
            ExplainError::Completion(LlmError::Timeout) => "LLM request timed out.".to_string(),
            ExplainError::Completion(_) => "LLM request failed.".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for ExplainError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ExplainError::ExtractionFailed(reason) => {
                tracing::warn!(reason = %reason, "text extraction failed")
            }
            ExplainError::MalformedOutput(reason) => {
                tracing::error!(reason = %reason, "model returned unusable output")
            }
            ExplainError::Completion(e) => {
                tracing::error!(error = %e, rate_limited = e.is_rate_limited(), "completion call failed")
            }
            ExplainError::NoInput => tracing::debug!("request without usable input"),
        }
        (status, Json(serde_json::json!({ "detail": self.detail() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_classes() {
        assert_eq!(ExplainError::NoInput.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ExplainError::ExtractionFailed("bad png".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ExplainError::MalformedOutput("eof".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ExplainError::Completion(LlmError::Timeout).status(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            ExplainError::Completion(LlmError::Status { status: 429, body: String::new() }).status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn upstream_body_not_exposed() {
        let err = ExplainError::Completion(LlmError::Status {
            status: 401,
            body: "invalid api key sk-123".into(),
        });
        assert_eq!(err.detail(), "LLM request failed.");
    }
}

use crate::domain::error::ProxyError;
use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde_json::json;

impl ResponseError for ProxyError {
    fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ProxyError::MissingFields | ProxyError::InvalidAgent(_) => StatusCode::BAD_REQUEST,
            // Upstream status is forwarded verbatim
            ProxyError::Upstream { status, .. } => {
                StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
            }
            ProxyError::UnparseableReply
            | ProxyError::Http(_)
            | ProxyError::Json(_)
            | ProxyError::Io(_)
            | ProxyError::Toml(_)
            | ProxyError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            ProxyError::MethodNotAllowed => json!({ "error": "Method not allowed" }),
            ProxyError::MissingFields => json!({ "error": "Missing agent or csvData" }),
            ProxyError::InvalidAgent(_) => json!({ "error": "Invalid agent type" }),
            ProxyError::Upstream { body, .. } => json!({
                "error": "AI processing failed",
                "details": body,
            }),
            other => json!({
                "error": "Server error",
                "message": other.to_string(),
            }),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

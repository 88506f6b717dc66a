use crate::application::process::process;
use crate::domain::error::ProxyError;
use crate::domain::model::ProcessRequest;
use crate::state::AppState;
use actix_web::{http::Method, web, HttpRequest, HttpResponse};
use std::time::Instant;
use tracing::{error, info, info_span, Instrument};
use uuid::Uuid;

/// `/api/process`: preflight, or translate one batch of tabular data.
pub async fn process_handler(
    req: HttpRequest,
    body: web::Bytes,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ProxyError> {
    // Handle preflight
    if req.method() == Method::OPTIONS {
        return Ok(HttpResponse::Ok().finish());
    }

    if req.method() != Method::POST {
        return Err(ProxyError::MethodNotAllowed);
    }

    // A body that is not a JSON object is treated as one with no fields
    let request: ProcessRequest = serde_json::from_slice(&body).unwrap_or_default();

    let span = info_span!(
        "process",
        request_id = %Uuid::new_v4(),
        agent = request.agent.as_deref().unwrap_or(""),
        total_rows = request.total_rows.unwrap_or(0),
    );

    async move {
        let started = Instant::now();
        let result = process(&*state.model, &request).await;
        let elapsed_ms = started.elapsed().as_millis() as u64;

        match result {
            Ok(value) => {
                info!(elapsed_ms, "Request processed");
                Ok(HttpResponse::Ok().json(value))
            }
            Err(e) if e.is_client_error() => {
                info!(elapsed_ms, "Rejected request: {}", e);
                Err(e)
            }
            Err(e) => {
                error!(elapsed_ms, "Error: {}", e);
                Err(e)
            }
        }
    }
    .instrument(span)
    .await
}

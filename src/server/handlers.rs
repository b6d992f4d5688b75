use crate::{
    classifier::Classifier,
    ticket::{TicketData, TicketResponse},
    Error,
};
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    pub classifier: Arc<dyn Classifier>,
}

/// Mints the display-correlation ticket ID. Not unique and not durable,
/// only distinct enough to tell consecutive responses apart.
fn next_ticket_id() -> String {
    format!("tkt-{}", chrono::Utc::now().timestamp_micros())
}

/// Precondition check; the classifier is never invoked on violation.
fn extract_description(payload: Result<Json<Value>, JsonRejection>) -> crate::Result<String> {
    let Json(value) = payload.map_err(|_| Error::invalid_input("Request body must be JSON"))?;

    match value.get("description") {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        _ => Err(Error::invalid_input(
            "Missing \"description\" field or it is not text",
        )),
    }
}

pub async fn classify(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> (StatusCode, Json<TicketResponse>) {
    let description = match extract_description(payload) {
        Ok(description) => description,
        Err(e) => return (e.status_code(), Json(TicketResponse::err(e.public_message()))),
    };

    info!(
        "Received classification request ({} chars)",
        description.len()
    );

    match state.classifier.classify(&description).await {
        Ok(result) => {
            let data = TicketData {
                result,
                ticket_id: next_ticket_id(),
            };
            info!(
                "Classified ticket {} as {:?}",
                data.ticket_id, data.result.category
            );
            (StatusCode::OK, Json(TicketResponse::ok(data)))
        }
        Err(e) => {
            error!("Classification failed: {}", e);
            (e.status_code(), Json(TicketResponse::err(e.public_message())))
        }
    }
}

/// Fallback for non-POST requests on /classify.
pub async fn method_not_allowed() -> (StatusCode, Json<TicketResponse>) {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(TicketResponse::err("Method not allowed. Use POST.")),
    )
}

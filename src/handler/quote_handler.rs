use axum::{extract::State, response::IntoResponse, Json};
use tracing::info;

use crate::dto::payload::RecordPayload;
use crate::dto::quote_dto::CreateQuoteRequest;
use crate::service::record_store::SharedRecordStore;
use crate::util::error::HandlerError;

// Handler: Create Quote (JSON or form body)
pub async fn create_quote_handler(
    State(store): State<SharedRecordStore>,
    payload: RecordPayload,
) -> Result<impl IntoResponse, HandlerError> {
    info!("[create_quote_handler] Handler called");
    let request: CreateQuoteRequest = payload.into_request()?;
    let receipt = store.create_quote(request).await?;
    Ok(Json(receipt))
}

// Handler: List Quotes
pub async fn list_quotes_handler(
    State(store): State<SharedRecordStore>,
) -> Result<impl IntoResponse, HandlerError> {
    let quotes = store.list_quotes().await?;
    Ok(Json(quotes))
}

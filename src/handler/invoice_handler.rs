use axum::{extract::State, response::IntoResponse, Json};
use tracing::info;

use crate::dto::invoice_dto::CreateInvoiceRequest;
use crate::dto::payload::RecordPayload;
use crate::service::record_store::SharedRecordStore;
use crate::util::error::HandlerError;

// Handler: Create Invoice (JSON or form body)
pub async fn create_invoice_handler(
    State(store): State<SharedRecordStore>,
    payload: RecordPayload,
) -> Result<impl IntoResponse, HandlerError> {
    info!("[create_invoice_handler] Handler called");
    let request: CreateInvoiceRequest = payload.into_request()?;
    let receipt = store.create_invoice(request).await?;
    Ok(Json(receipt))
}

// Handler: List Invoices
pub async fn list_invoices_handler(
    State(store): State<SharedRecordStore>,
) -> Result<impl IntoResponse, HandlerError> {
    let invoices = store.list_invoices().await?;
    Ok(Json(invoices))
}

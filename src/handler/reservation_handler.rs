use axum::{extract::State, response::IntoResponse, Json};
use tracing::info;

use crate::dto::payload::RecordPayload;
use crate::dto::reservation_dto::CreateReservationRequest;
use crate::service::record_store::SharedRecordStore;
use crate::util::error::HandlerError;

// Handler: Create Reservation (JSON or form body)
pub async fn create_reservation_handler(
    State(store): State<SharedRecordStore>,
    payload: RecordPayload,
) -> Result<impl IntoResponse, HandlerError> {
    info!("[create_reservation_handler] Handler called");
    let request: CreateReservationRequest = payload.into_request()?;
    let receipt = store.create_reservation(request).await?;
    Ok(Json(receipt))
}

// Handler: List Reservations
pub async fn list_reservations_handler(
    State(store): State<SharedRecordStore>,
) -> Result<impl IntoResponse, HandlerError> {
    let reservations = store.list_reservations().await?;
    Ok(Json(reservations))
}

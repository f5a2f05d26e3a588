use axum::{Router, routing::post};
use crate::handler::reservation_handler::{
    create_reservation_handler,
    list_reservations_handler,
};
use crate::service::record_store::SharedRecordStore;


pub fn reservation_router(store: SharedRecordStore) -> Router {
    Router::new()
        .route("/api/reservations", post(create_reservation_handler).get(list_reservations_handler))
        .with_state(store)
}

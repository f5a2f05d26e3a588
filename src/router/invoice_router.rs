use axum::{Router, routing::post};
use crate::handler::invoice_handler::{
    create_invoice_handler,
    list_invoices_handler,
};
use crate::service::record_store::SharedRecordStore;


pub fn invoice_router(store: SharedRecordStore) -> Router {
    Router::new()
        .route("/api/factures", post(create_invoice_handler).get(list_invoices_handler))
        .with_state(store)
}

use axum::{Router, routing::post};
use crate::handler::quote_handler::{
    create_quote_handler,
    list_quotes_handler,
};
use crate::service::record_store::SharedRecordStore;


pub fn quote_router(store: SharedRecordStore) -> Router {
    Router::new()
        .route("/api/devis", post(create_quote_handler).get(list_quotes_handler))
        .with_state(store)
}

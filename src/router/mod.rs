pub mod invoice_router;
pub mod quote_router;
pub mod reservation_router;

pub mod invoice_handler;
pub mod quote_handler;
pub mod reservation_handler;

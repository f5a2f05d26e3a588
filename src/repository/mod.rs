pub mod db;
pub mod insert;
pub mod invoice_repo;
pub mod quote_repo;
pub mod repository_error;
pub mod reservation_repo;
pub mod schema;

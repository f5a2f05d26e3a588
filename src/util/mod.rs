pub mod error;
pub mod logger;
pub mod pricing;
pub mod record_id;

pub mod invoice;
pub mod quote;
pub mod reservation;

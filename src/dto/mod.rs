pub mod invoice_dto;
pub mod payload;
pub mod quote_dto;
pub mod reservation_dto;

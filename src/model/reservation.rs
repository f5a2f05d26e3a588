use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const RESERVATION_STATUS_CONFIRMED: &str = "confirmed";

/// A booked appointment slot. `date` and `time` are stored exactly as the
/// client sent them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Reservation {
    pub id: String,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub service_type: String,
    pub date: String,
    pub time: String,
    pub description: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewReservation {
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub service_type: String,
    pub date: String,
    pub time: String,
    pub description: String,
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Default status of a freshly created quote.
pub const QUOTE_STATUS_PENDING: &str = "pending";

/// A priced estimate request (devis), as stored in the `quotes` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Quote {
    pub id: String,
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub service_type: String,
    pub description: String,
    pub price: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Validated quote fields, before the repository assigns id and timestamp.
#[derive(Debug, Clone)]
pub struct NewQuote {
    pub client_name: String,
    pub client_email: String,
    pub client_phone: String,
    pub service_type: String,
    pub description: String,
    pub price: f64,
}

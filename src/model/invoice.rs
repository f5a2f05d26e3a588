use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const INVOICE_STATUS_PENDING: &str = "pending";

/// A billing record (facture). `quote_id` may point at a quote but is never checked.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Invoice {
    pub id: String,
    pub quote_id: Option<String>,
    pub client_name: String,
    pub client_email: String,
    pub service_type: String,
    pub amount: f64,
    pub status: String,
    /// `YYYY-MM-DD`, local date at creation
    pub invoice_date: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct NewInvoice {
    pub quote_id: Option<String>,
    pub client_name: String,
    pub client_email: String,
    pub service_type: String,
    pub amount: f64,
    pub invoice_date: String,
}

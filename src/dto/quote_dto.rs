use crate::model::quote::{NewQuote, Quote};
use serde::{Deserialize, Serialize};

use validator::Validate;

// --- Validated DTOs for request validation ---

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateQuoteRequest {
    #[validate(required)]
    pub client_name: Option<String>,

    #[validate(required)]
    pub client_email: Option<String>,

    pub client_phone: Option<String>,

    #[validate(required)]
    pub service_type: Option<String>,

    pub description: Option<String>,
}

impl CreateQuoteRequest {
    /// Fields for the insert; `price` comes from the price table.
    /// Call after validation: absent values fall back to empty strings.
    pub fn into_new_quote(self, price: f64) -> NewQuote {
        NewQuote {
            client_name: self.client_name.unwrap_or_default(),
            client_email: self.client_email.unwrap_or_default(),
            client_phone: self.client_phone.unwrap_or_default(),
            service_type: self.service_type.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            price,
        }
    }
}

/// Body returned by `POST /api/devis`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteReceipt {
    pub success: bool,
    pub devis_id: String,
    pub prix_estime: f64,
    pub message: String,
}

impl From<&Quote> for QuoteReceipt {
    fn from(quote: &Quote) -> Self {
        QuoteReceipt {
            success: true,
            devis_id: quote.id.clone(),
            prix_estime: quote.price,
            message: format!("Devis #{} créé avec succès", quote.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::payload::RecordPayload;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> RecordPayload {
        match value {
            serde_json::Value::Object(map) => RecordPayload(map),
            _ => panic!("expected a JSON object"),
        }
    }

    #[test]
    fn test_valid_request() {
        let request: CreateQuoteRequest = payload(json!({
            "client_name": "Jean Dupont",
            "client_email": "jean@example.com",
            "service_type": "polissage",
        }))
        .into_request()
        .unwrap();
        let quote = request.into_new_quote(80.0);
        assert_eq!(quote.client_name, "Jean Dupont");
        assert_eq!(quote.client_phone, "");
        assert_eq!(quote.description, "");
        assert_eq!(quote.price, 80.0);
    }

    #[test]
    fn test_missing_email_is_named() {
        let err = payload(json!({ "client_name": "Jean", "service_type": "custom" }))
            .into_request::<CreateQuoteRequest>()
            .unwrap_err();
        assert!(err.to_string().contains("Missing required field: client_email"));
    }

    #[test]
    fn test_null_counts_as_missing() {
        let err = payload(json!({ "client_name": null, "client_email": "a@b.com", "service_type": "custom" }))
            .into_request::<CreateQuoteRequest>()
            .unwrap_err();
        assert!(err.to_string().contains("client_name"));
    }

    #[test]
    fn test_list_value_is_rejected() {
        let err = payload(json!({ "client_name": ["A", "B"], "client_email": "a@b.com", "service_type": "custom" }))
            .into_request::<CreateQuoteRequest>()
            .unwrap_err();
        assert!(err.to_string().contains("Invalid request body"));
    }
}

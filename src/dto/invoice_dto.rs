use crate::model::invoice::{Invoice, NewInvoice};
use crate::util::error::ServiceError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use validator::Validate;

/// `montant` and `devis_id` are accepted for the billing form's field names.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CreateInvoiceRequest {
    #[serde(alias = "devis_id")]
    pub quote_id: Option<String>,

    #[validate(required)]
    pub client_name: Option<String>,

    #[validate(required)]
    pub client_email: Option<String>,

    #[validate(required)]
    pub service_type: Option<String>,

    /// JSON number or numeric string
    #[serde(alias = "montant")]
    #[validate(required)]
    pub amount: Option<Value>,
}

impl CreateInvoiceRequest {
    pub fn parse_amount(&self) -> Result<f64, ServiceError> {
        let value = self
            .amount
            .as_ref()
            .ok_or_else(|| ServiceError::Validation("Missing required field: amount".to_string()))?;
        let amount = match value {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().parse::<f64>().ok(),
            _ => None,
        };
        amount
            .filter(|a| a.is_finite())
            .ok_or_else(|| ServiceError::Validation(format!("Invalid amount: {} is not a number", value)))
    }

    pub fn into_new_invoice(self, amount: f64, invoice_date: String) -> NewInvoice {
        NewInvoice {
            quote_id: self.quote_id,
            client_name: self.client_name.unwrap_or_default(),
            client_email: self.client_email.unwrap_or_default(),
            service_type: self.service_type.unwrap_or_default(),
            amount,
            invoice_date,
        }
    }
}

/// Body returned by `POST /api/factures`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceReceipt {
    pub success: bool,
    pub facture_id: String,
    pub date_facture: String,
    pub message: String,
}

impl From<&Invoice> for InvoiceReceipt {
    fn from(invoice: &Invoice) -> Self {
        InvoiceReceipt {
            success: true,
            facture_id: invoice.id.clone(),
            date_facture: invoice.invoice_date.clone(),
            message: format!("Facture #{} générée avec succès", invoice.id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn request_with_amount(amount: Value) -> CreateInvoiceRequest {
        CreateInvoiceRequest {
            client_name: Some("A".into()),
            client_email: Some("a@b.com".into()),
            service_type: Some("renovation".into()),
            amount: Some(amount),
            ..Default::default()
        }
    }

    #[test]
    fn test_amount_number_or_string() {
        assert_eq!(request_with_amount(json!(150)).parse_amount().unwrap(), 150.0);
        assert_eq!(request_with_amount(json!("150")).parse_amount().unwrap(), 150.0);
        assert_eq!(request_with_amount(json!(" 99.5 ")).parse_amount().unwrap(), 99.5);
    }

    #[test]
    fn test_amount_must_be_numeric() {
        for bad in [json!("abc"), json!(""), json!(true), json!(["1"]), json!("NaN"), json!("inf")] {
            let err = request_with_amount(bad.clone()).parse_amount().unwrap_err();
            assert!(matches!(err, ServiceError::Validation(_)), "{} accepted", bad);
        }
    }

    #[test]
    fn test_montant_alias() {
        let request: CreateInvoiceRequest = serde_json::from_value(json!({
            "client_name": "A",
            "client_email": "a@b.com",
            "service_type": "renovation",
            "montant": "120.5",
            "devis_id": "ab12cd34",
        }))
        .unwrap();
        assert_eq!(request.parse_amount().unwrap(), 120.5);
        assert_eq!(request.quote_id.as_deref(), Some("ab12cd34"));
    }
}

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde_json::map::Entry;
use serde_json::{Map, Value};
use tracing::debug;
use validator::Validate;

use crate::util::error::{HandlerError, ServiceError};

/// Flat key/value view of a create request body.
///
/// `application/json` bodies must be a JSON object. Every other content type
/// is read as a URL-encoded form: blank values are dropped, a field sent once
/// becomes a string and a repeated field becomes a list of strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordPayload(pub Map<String, Value>);

impl RecordPayload {
    pub fn from_json(body: &[u8]) -> Result<Self, ServiceError> {
        serde_json::from_slice::<Map<String, Value>>(body)
            .map(RecordPayload)
            .map_err(|e| ServiceError::Validation(format!("Invalid JSON body: {}", e)))
    }

    pub fn from_form(body: &[u8]) -> Result<Self, ServiceError> {
        let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(body)
            .map_err(|e| ServiceError::Validation(format!("Invalid form body: {}", e)))?;

        let mut fields = Map::new();
        for (key, value) in pairs {
            if value.is_empty() {
                continue;
            }
            match fields.entry(key) {
                Entry::Vacant(slot) => {
                    slot.insert(Value::String(value));
                }
                Entry::Occupied(mut slot) => match slot.get_mut() {
                    Value::Array(values) => values.push(Value::String(value)),
                    existing => {
                        let first = existing.take();
                        *existing = Value::Array(vec![first, Value::String(value)]);
                    }
                },
            }
        }
        Ok(RecordPayload(fields))
    }

    /// Deserialize into a typed request and run its validation rules.
    ///
    /// Numbers and booleans are read as their text form, so `"client_phone": 612345678`
    /// is stored as `"612345678"`.
    pub fn into_request<T>(self) -> Result<T, ServiceError>
    where
        T: DeserializeOwned + Validate,
    {
        let fields: Map<String, Value> = self
            .0
            .into_iter()
            .map(|(key, value)| (key, scalar_as_text(value)))
            .collect();
        let request: T = serde_json::from_value(Value::Object(fields))
            .map_err(|e| ServiceError::Validation(format!("Invalid request body: {}", e)))?;
        check_request(&request)?;
        Ok(request)
    }
}

fn scalar_as_text(value: Value) -> Value {
    match value {
        Value::Number(n) => Value::String(n.to_string()),
        Value::Bool(b) => Value::String(b.to_string()),
        other => other,
    }
}

/// Collapse `validator` output into one readable message naming each field.
pub fn check_request<T: Validate>(request: &T) -> Result<(), ServiceError> {
    let Err(errors) = request.validate() else {
        return Ok(());
    };
    let mut problems: Vec<String> = Vec::new();
    for (field, field_errors) in errors.field_errors() {
        for error in field_errors.iter() {
            if error.code == "required" {
                problems.push(format!("Missing required field: {}", field));
            } else {
                problems.push(format!("Invalid field {}: {}", field, error.code));
            }
        }
    }
    problems.sort();
    Err(ServiceError::Validation(problems.join("; ")))
}

impl<S> FromRequest<S> for RecordPayload
where
    S: Send + Sync,
{
    type Rejection = HandlerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(|ct| ct.trim_start().starts_with("application/json"))
            .unwrap_or(false);

        let body = Bytes::from_request(req, state)
            .await
            .map_err(|e| HandlerError::bad_request(format!("Failed to read request body: {}", e)))?;
        debug!(is_json, len = body.len(), "Decoding request body");

        let payload = if is_json {
            RecordPayload::from_json(&body)
        } else {
            RecordPayload::from_form(&body)
        };
        payload.map_err(HandlerError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_form_single_values_are_scalars() {
        let payload = RecordPayload::from_form(b"client_name=Jean+Dupont&client_email=jean%40example.com").unwrap();
        assert_eq!(payload.0.get("client_name"), Some(&json!("Jean Dupont")));
        assert_eq!(payload.0.get("client_email"), Some(&json!("jean@example.com")));
    }

    #[test]
    fn test_form_repeated_values_become_lists() {
        let payload = RecordPayload::from_form(b"tag=a&tag=b&tag=c").unwrap();
        assert_eq!(payload.0.get("tag"), Some(&json!(["a", "b", "c"])));
    }

    #[test]
    fn test_form_blank_values_are_dropped() {
        let payload = RecordPayload::from_form(b"client_phone=&client_name=A").unwrap();
        assert!(payload.0.get("client_phone").is_none());
        assert_eq!(payload.0.len(), 1);
    }

    #[test]
    fn test_json_scalars_are_read_as_text() {
        let payload = RecordPayload::from_json(
            br#"{"client_name": "A", "client_email": "a@b.com", "client_phone": 612345678, "service_type": "custom", "description": true}"#,
        )
        .unwrap();
        let request: crate::dto::quote_dto::CreateQuoteRequest = payload.into_request().unwrap();
        assert_eq!(request.client_phone.as_deref(), Some("612345678"));
        assert_eq!(request.description.as_deref(), Some("true"));
    }

    #[test]
    fn test_json_objects_in_text_fields_are_rejected() {
        let payload = RecordPayload::from_json(
            br#"{"client_name": {"first": "A"}, "client_email": "a@b.com", "service_type": "custom"}"#,
        )
        .unwrap();
        let err = payload.into_request::<crate::dto::quote_dto::CreateQuoteRequest>().unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[test]
    fn test_json_must_be_an_object() {
        assert!(RecordPayload::from_json(br#"{"client_name": "A"}"#).is_ok());
        assert!(RecordPayload::from_json(b"[1, 2]").is_err());
        assert!(RecordPayload::from_json(b"not json").is_err());
    }
}

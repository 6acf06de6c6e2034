//! Response Decoding
//!
//! Mutation endpoints answer with a human-readable message, either as a
//! JSON string, a JSON object with a `message` field, or plain text. Errors
//! carry the same shapes.

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{AdminError, Result};

/// Message used when a 2xx mutation response has no body
pub const DEFAULT_SUCCESS: &str = "Saved successfully";

fn extract_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    let message = match serde_json::from_str::<Value>(body) {
        Ok(Value::String(text)) => Some(text),
        Ok(Value::Object(map)) => map
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string),
        Ok(_) => None,
        Err(_) => Some(body.to_string()),
    };
    message.filter(|message| !message.trim().is_empty())
}

/// Decode the body of a successful mutation
pub fn decode_message(body: &str) -> String {
    extract_message(body).unwrap_or_else(|| DEFAULT_SUCCESS.to_string())
}

/// Decode a non-2xx response
pub fn decode_error(status: u16, body: &str) -> AdminError {
    let message =
        extract_message(body).unwrap_or_else(|| format!("Request failed with status {status}"));
    AdminError::Api { status, message }
}

/// Decode a collection response
pub fn decode_list<E: DeserializeOwned>(body: &str) -> Result<Vec<E>> {
    serde_json::from_str(body).map_err(|e| AdminError::Decode(e.to_string()))
}

/// Map a status/body pair to a message or an error
pub fn decode_mutation(status: u16, body: &str) -> Result<String> {
    if (200..300).contains(&status) {
        Ok(decode_message(body))
    } else {
        Err(decode_error(status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ElectionParty;

    #[test]
    fn success_bodies() {
        assert_eq!(decode_message(r#""Party updated""#), "Party updated");
        assert_eq!(decode_message(r#"{"message":"Node created"}"#), "Node created");
        assert_eq!(decode_message("District suspended"), "District suspended");
        assert_eq!(decode_message(""), DEFAULT_SUCCESS);
        assert_eq!(decode_message(r#"{"id":3}"#), DEFAULT_SUCCESS);
    }

    #[test]
    fn error_bodies() {
        assert_eq!(
            decode_error(422, r#"{"message":"Name is taken"}"#),
            AdminError::Api { status: 422, message: "Name is taken".into() }
        );
        assert_eq!(
            decode_error(502, "  Bad Gateway \n"),
            AdminError::Api { status: 502, message: "Bad Gateway".into() }
        );
        assert_eq!(
            decode_error(500, ""),
            AdminError::Api { status: 500, message: "Request failed with status 500".into() }
        );
    }

    #[test]
    fn mutation_status_decides_outcome() {
        assert_eq!(decode_mutation(201, r#""ok""#), Ok("ok".to_string()));
        assert!(matches!(decode_mutation(404, "missing"), Err(AdminError::Api { status: 404, .. })));
    }

    #[test]
    fn collection_decoding() {
        let body = r#"[{"id":1,"name":"Blue","isActive":false,"createdAt":"2024-01-01T00:00:00Z"}]"#;
        let parties: Vec<ElectionParty> = decode_list(body).unwrap();
        assert_eq!(parties.len(), 1);
        assert!(!parties[0].is_active);

        let err = decode_list::<ElectionParty>("{}").unwrap_err();
        assert!(matches!(err, AdminError::Decode(_)));
    }
}

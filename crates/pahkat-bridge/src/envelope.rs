//! Wire envelopes in both directions.
//!
//! Outgoing: `{"id":<int>,"method":"<name>","args":[...]}`, compact JSON,
//! field order fixed. Incoming: any JSON object; a truthy `error` field (in
//! the JavaScript sense) routes the whole object to rejection, anything else
//! resolves with the whole object.

use serde::Serialize;
use serde_json::Value;

use crate::error::RpcError;

/// One outgoing call. Immutable once constructed.
#[derive(Debug, Clone, Serialize)]
pub struct CallEnvelope {
    pub id: u64,
    pub method: String,
    pub args: Vec<Value>,
}

impl CallEnvelope {
    pub fn new(id: u64, method: impl Into<String>, args: Vec<Value>) -> Self {
        Self {
            id,
            method: method.into(),
            args,
        }
    }

    /// Serialize for transport.
    pub fn to_json(&self) -> Result<String, RpcError> {
        serde_json::to_string(self).map_err(RpcError::Encode)
    }
}

/// Parse a host response: rejection on unparsable text or a truthy `error`
/// field, otherwise the full parsed object.
pub fn parse_response(raw: &str) -> Result<Value, RpcError> {
    let value: Value = serde_json::from_str(raw).map_err(RpcError::Parse)?;
    if is_truthy(value.get("error")) {
        return Err(RpcError::Host(value));
    }
    Ok(value)
}

/// JavaScript truthiness, which is what the host's `error` field is judged
/// by: null/false/0/NaN/"" are falsy, everything else is truthy.
fn is_truthy(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(b)) => *b,
        Some(Value::Number(n)) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(true),
        Some(Value::String(s)) => !s.is_empty(),
        Some(Value::Array(_)) | Some(Value::Object(_)) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_with_fixed_field_order() {
        let envelope = CallEnvelope::new(5, "install", vec![json!(["pkg://a"])]);
        assert_eq!(
            envelope.to_json().unwrap(),
            r#"{"id":5,"method":"install","args":[["pkg://a"]]}"#
        );
    }

    #[test]
    fn empty_args_serialize_as_empty_array() {
        let envelope = CallEnvelope::new(0, "repos", vec![]);
        assert_eq!(
            envelope.to_json().unwrap(),
            r#"{"id":0,"method":"repos","args":[]}"#
        );
    }

    #[test]
    fn falsy_error_resolves_with_full_object() {
        let value = parse_response(r#"{"error":null,"count":3}"#).unwrap();
        assert_eq!(value, json!({"error": null, "count": 3}));

        // Present-but-falsy error keys still resolve.
        assert!(parse_response(r#"{"error":false}"#).is_ok());
        assert!(parse_response(r#"{"error":0}"#).is_ok());
        assert!(parse_response(r#"{"error":""}"#).is_ok());
    }

    #[test]
    fn truthy_error_rejects_with_full_object() {
        let err = parse_response(r#"{"error":{"code":-1},"partial":true}"#).unwrap_err();
        match err {
            RpcError::Host(value) => {
                assert_eq!(value, json!({"error": {"code": -1}, "partial": true}));
            }
            other => panic!("expected host error, got {other:?}"),
        }

        assert!(matches!(
            parse_response(r#"{"error":"nope"}"#),
            Err(RpcError::Host(_))
        ));
        assert!(matches!(
            parse_response(r#"{"error":true}"#),
            Err(RpcError::Host(_))
        ));
    }

    #[test]
    fn unparsable_text_rejects_with_parse_error() {
        assert!(matches!(
            parse_response("not json at all"),
            Err(RpcError::Parse(_))
        ));
    }

    #[test]
    fn non_object_payloads_resolve() {
        // No `error` field to consult; the parsed value is the result.
        assert_eq!(parse_response("[1,2,3]").unwrap(), json!([1, 2, 3]));
        assert_eq!(parse_response("null").unwrap(), Value::Null);
    }
}

use serde_json::Value;

/// Ways a call can settle badly. Nothing is retried or logged away
/// internally; every failure reaches the caller.
#[derive(Debug, thiserror::Error)]
pub enum RpcError {
    /// The host answered, and the answer carried a truthy `error` field.
    /// The value is the whole parsed response; its schema is host-defined.
    #[error("host reported an error: {0}")]
    Host(Value),

    /// The host's response text was not valid JSON.
    #[error("response parse error: {0}")]
    Parse(serde_json::Error),

    /// The call envelope could not be serialized.
    #[error("request encode error: {0}")]
    Encode(serde_json::Error),

    /// The host's response parsed but did not match the operation's
    /// result shape.
    #[error("response decode error: {0}")]
    Decode(serde_json::Error),

    /// The responder was dropped before a reply arrived, e.g. after
    /// an explicit unregister.
    #[error("response channel closed before a reply arrived")]
    ChannelClosed,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn host_error_displays_payload() {
        let err = RpcError::Host(json!({"error": "no such package"}));
        assert_eq!(
            err.to_string(),
            r#"host reported an error: {"error":"no such package"}"#
        );
    }

    #[test]
    fn parse_error_display() {
        let inner = serde_json::from_str::<Value>("{").unwrap_err();
        let err = RpcError::Parse(inner);
        assert!(err.to_string().starts_with("response parse error: "));
    }

    #[test]
    fn channel_closed_display() {
        assert_eq!(
            RpcError::ChannelClosed.to_string(),
            "response channel closed before a reply arrived"
        );
    }
}

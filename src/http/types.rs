//! Wire envelopes for the TON HTTP API.
//!
//! REST-style endpoints wrap every payload in `{ok, result}` and signal
//! failure as `{ok: false, error, code}` even under HTTP 200. The generic
//! `/jsonRPC` endpoint uses the standard JSON-RPC 2.0 envelope instead.

use serde::{Deserialize, Serialize};

/// Response envelope used by all REST-style endpoints.
///
/// `ok == false` indicates failure regardless of the HTTP status; the
/// typed bindings check it after decoding.
#[derive(Debug, Deserialize)]
pub struct ApiResponse<T> {
    pub ok: bool,
    pub result: Option<T>,
    pub error: Option<String>,
    pub code: Option<i64>,
}

/// Error shape probed out of non-2xx response bodies by the transport.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    #[serde(default)]
    pub ok: bool,
    pub error: Option<String>,
    pub code: Option<i64>,
}

/// JSON-RPC 2.0 request envelope for the `/jsonRPC` endpoint.
#[derive(Debug, Serialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: &'static str,
    pub method: String,
    pub params: Option<StackValue>,
    pub id: i64,
}

/// JSON-RPC 2.0 response envelope.
///
/// Per the specification, exactly one of `result` and `error` should be
/// present in a valid response.
#[derive(Debug, Deserialize)]
pub struct JsonRpcResponse<T> {
    #[serde(default)]
    pub jsonrpc: Option<String>,
    pub result: Option<T>,
    pub error: Option<JsonRpcError>,
    #[serde(default)]
    pub id: Option<serde_json::Value>,
}

/// Error member of a JSON-RPC 2.0 response.
#[derive(Debug, Clone, Deserialize)]
pub struct JsonRpcError {
    pub code: i64,
    pub message: String,
    pub data: Option<String>,
}

/// A dynamically typed value in a get-method stack or JSON-RPC params.
///
/// The remote contract-method stack format is a small ad hoc encoding of
/// nested arrays of strings and numbers (for example
/// `[["num", "0x1"], ["cell", "..."]]`), so the variants stay close to JSON
/// while remaining a closed set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StackValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Array(Vec<StackValue>),
    Object(std::collections::BTreeMap<String, StackValue>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_value_decodes_num_pairs() {
        let json = r#"[["num", "0x1"], ["num", 3]]"#;
        let stack: Vec<Vec<StackValue>> = serde_json::from_str(json).unwrap();
        assert_eq!(stack[0][1], StackValue::String("0x1".to_string()));
        assert_eq!(stack[1][1], StackValue::Int(3));
    }

    #[test]
    fn stack_value_roundtrips_nested_arrays() {
        let value = StackValue::Array(vec![
            StackValue::String("num".to_string()),
            StackValue::Int(42),
        ]);
        let encoded = serde_json::to_string(&value).unwrap();
        assert_eq!(encoded, r#"["num",42]"#);
    }

    #[test]
    fn api_response_tolerates_missing_error_fields() {
        let json = r#"{"ok": true, "result": "123"}"#;
        let response: ApiResponse<String> = serde_json::from_str(json).unwrap();
        assert!(response.ok);
        assert_eq!(response.result.as_deref(), Some("123"));
        assert!(response.error.is_none());
    }
}

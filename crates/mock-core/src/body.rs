//! Request body decoding shared by every mock operation.

use crate::error::{MockError, MockResult};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Decode a raw request body into a typed payload.
///
/// An empty (or whitespace-only) body decodes as `{}`. Anything that is not a
/// JSON object is rejected as malformed.
pub fn parse_body<T: DeserializeOwned>(raw: &[u8]) -> MockResult<T> {
    let value = parse_object(raw)?;
    Ok(serde_json::from_value(value)?)
}

/// Decode a raw request body into a JSON object without a target type
pub fn parse_object(raw: &[u8]) -> MockResult<Value> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Default::default()));
    }

    let value: Value = serde_json::from_slice(raw)?;
    if !value.is_object() {
        return Err(MockError::MalformedBody(
            "expected a JSON object".to_string(),
        ));
    }
    Ok(value)
}

/// Treat absent, `null` and `""` alike as a missing identifying field.
/// Any other value is passed through as given.
pub(crate) fn require(value: Option<Value>, field: &'static str) -> MockResult<Value> {
    match value {
        None | Some(Value::Null) => Err(MockError::MissingField(field)),
        Some(Value::String(s)) if s.is_empty() => Err(MockError::MissingField(field)),
        Some(v) => Ok(v),
    }
}

use crate::core::errors::KudaError;
use crate::core::types::ApiResponse;
use serde_json::Value;

/// Turn a status code and raw body into an [`ApiResponse`].
///
/// The server is inconsistent about key casing, so each field is looked up
/// capitalized first and lowercase second. A `null` value counts as absent.
pub fn normalize(status_code: u16, body: &[u8]) -> Result<ApiResponse, KudaError> {
    let raw: Value = serde_json::from_slice(body).map_err(|e| KudaError::InvalidResponse {
        status_code,
        message: format!("Unable to decode response: {}", e),
    })?;

    Ok(ApiResponse {
        status_code,
        status: lookup(&raw, "Status", "status").map(as_text),
        message: lookup(&raw, "Message", "message").map(as_text),
        data: lookup(&raw, "Data", "data").cloned(),
        raw,
    })
}

fn lookup<'a>(raw: &'a Value, primary: &str, fallback: &str) -> Option<&'a Value> {
    let fields = raw.as_object()?;
    fields
        .get(primary)
        .filter(|value| !value.is_null())
        .or_else(|| fields.get(fallback).filter(|value| !value.is_null()))
}

// Some endpoints answer `"status": true`; keep the text form of non-strings.
fn as_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

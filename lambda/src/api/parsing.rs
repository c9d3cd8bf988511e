use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value;

pub fn v_path<'a>(root: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut cur = root;
    for key in path {
        cur = cur.get(*key)?;
    }
    Some(cur)
}

pub fn v_str<'a>(root: &'a Value, path: &[&str]) -> Option<&'a str> {
    v_path(root, path).and_then(|v| v.as_str())
}

/// HTTP method of a REST (v1) or HTTP API (v2) proxy event.
pub fn request_method(payload: &Value) -> Option<&str> {
    v_str(payload, &["httpMethod"])
        .or_else(|| v_str(payload, &["requestContext", "http", "method"]))
}

pub fn is_preflight(payload: &Value) -> bool {
    request_method(payload).is_some_and(|m| m.eq_ignore_ascii_case("OPTIONS"))
}

pub fn is_base64_encoded(payload: &Value) -> bool {
    payload
        .get("isBase64Encoded")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

/// Raw body length in bytes, as received.
pub fn body_len(payload: &Value) -> usize {
    v_str(payload, &["body"]).map_or(0, str::len)
}

fn decode_body(raw: &str, base64_encoded: bool) -> Option<String> {
    if !base64_encoded {
        return Some(raw.to_string());
    }
    let bytes = STANDARD.decode(raw.trim()).ok()?;
    String::from_utf8(bytes).ok()
}

/// Extracts the `text` field from the request body.
///
/// Anything that does not yield a string `text` (missing or `null` body,
/// undecodable base64, invalid JSON, missing or non-string `text`) comes back
/// as an empty string. An already-structured object body is read directly.
pub fn extract_text(payload: &Value) -> String {
    let parsed = match payload.get("body") {
        Some(Value::String(raw)) => decode_body(raw, is_base64_encoded(payload))
            .and_then(|body| serde_json::from_str::<Value>(&body).ok()),
        Some(body @ Value::Object(_)) => Some(body.clone()),
        _ => None,
    };

    parsed
        .as_ref()
        .and_then(|body| v_str(body, &["text"]))
        .unwrap_or_default()
        .to_string()
}

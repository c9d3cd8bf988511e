//! Response builders for the API Gateway proxy integration.
//!
//! Every response carries the same CORS headers; only a successful
//! classification also sets `Content-Type`.

use serde_json::{Map, Value, json};

/// CORS headers attached to every response.
pub const CORS_HEADERS: [(&str, &str); 3] = [
    ("Access-Control-Allow-Origin", "*"),
    ("Access-Control-Allow-Methods", "OPTIONS,POST,GET"),
    ("Access-Control-Allow-Headers", "*"),
];

fn cors_headers() -> Map<String, Value> {
    CORS_HEADERS
        .iter()
        .map(|(name, value)| ((*name).to_string(), Value::from(*value)))
        .collect()
}

/// Returns a 200 OK response with `body` serialized as JSON.
#[must_use]
pub fn ok_json(body: &Value) -> Value {
    let mut headers = cors_headers();
    headers.insert("Content-Type".to_string(), json!("application/json"));
    json!({
        "statusCode": 200,
        "headers": headers,
        "body": body.to_string()
    })
}

/// Returns an error response with the given status code and message.
#[must_use]
pub fn err_response(status_code: u16, message: &str) -> Value {
    json!({
        "statusCode": status_code,
        "headers": cors_headers(),
        "body": json!({ "error": message }).to_string()
    })
}

/// Returns the answer to a CORS preflight (`OPTIONS`) request.
#[must_use]
pub fn preflight() -> Value {
    json!({
        "statusCode": 200,
        "headers": cors_headers(),
        "body": ""
    })
}

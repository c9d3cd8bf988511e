use sentiment_lambda::api::helpers::{CORS_HEADERS, err_response, ok_json, preflight};
use serde_json::{Value, json};

/// Tests for the proxy response builders.
/// These verify the status code, CORS headers and body format of each response shape.

fn header<'a>(response: &'a Value, name: &str) -> Option<&'a str> {
    response["headers"].get(name).and_then(Value::as_str)
}

#[test]
fn test_cors_header_values() {
    assert_eq!(
        CORS_HEADERS,
        [
            ("Access-Control-Allow-Origin", "*"),
            ("Access-Control-Allow-Methods", "OPTIONS,POST,GET"),
            ("Access-Control-Allow-Headers", "*"),
        ]
    );
}

#[test]
fn test_ok_json_response() {
    let response = ok_json(&json!({ "Sentiment": "NEUTRAL" }));

    assert_eq!(response["statusCode"], 200);
    assert_eq!(header(&response, "Content-Type"), Some("application/json"));
    for (name, value) in CORS_HEADERS {
        assert_eq!(header(&response, name), Some(value));
    }
    assert_eq!(response["body"], r#"{"Sentiment":"NEUTRAL"}"#);
}

#[test]
fn test_err_response_has_cors_but_no_content_type() {
    let response = err_response(500, "something broke");

    assert_eq!(response["statusCode"], 500);
    assert_eq!(header(&response, "Content-Type"), None);
    assert_eq!(response["headers"].as_object().unwrap().len(), 3);
    for (name, value) in CORS_HEADERS {
        assert_eq!(header(&response, name), Some(value));
    }

    let body: Value = serde_json::from_str(response["body"].as_str().unwrap()).unwrap();
    assert_eq!(body["error"], "something broke");
}

#[test]
fn test_err_response_escapes_message() {
    let response = err_response(500, "quote \" and newline \n");
    let body: Value = serde_json::from_str(response["body"].as_str().unwrap()).unwrap();
    assert_eq!(body["error"], "quote \" and newline \n");
}

#[test]
fn test_preflight_response() {
    let response = preflight();

    assert_eq!(response["statusCode"], 200);
    assert_eq!(response["body"], "");
    assert_eq!(header(&response, "Access-Control-Allow-Methods"), Some("OPTIONS,POST,GET"));
}

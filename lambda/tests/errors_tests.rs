use aws_sdk_comprehend::error::{ErrorMetadata, SdkError};
use aws_sdk_comprehend::operation::detect_sentiment::DetectSentimentError;
use sentiment_lambda::errors::{ClassifierError, HandlerError};
use std::error::Error;

#[test]
fn test_errors_implement_error_trait() {
    fn assert_error<T: Error>(_: &T) {}

    assert_error(&ClassifierError::Service("test error".to_string()));
    assert_error(&HandlerError::NoText);
}

#[test]
fn test_classifier_error_display() {
    // Service messages pass through untouched
    let error = ClassifierError::Service("Rate exceeded".to_string());
    assert_eq!(format!("{error}"), "Rate exceeded");

    let error = ClassifierError::MalformedResponse("missing label".to_string());
    assert_eq!(
        format!("{error}"),
        "Malformed classifier response: missing label"
    );
}

#[test]
fn test_handler_error_display_and_status() {
    let error = HandlerError::NoText;
    assert_eq!(format!("{error}"), "No text provided");
    assert_eq!(error.status_code(), 400);

    let error: HandlerError = ClassifierError::Service("quota exhausted".to_string()).into();
    assert_eq!(format!("{error}"), "quota exhausted");
    assert_eq!(error.status_code(), 500);
}

/// Stand-in for the raw HTTP response attached to an `SdkError`.
#[derive(Debug)]
#[allow(dead_code)]
struct RawResponse {
    status: u16,
    headers: Vec<(&'static str, &'static str)>,
    body: &'static str,
}

fn throttled_response() -> RawResponse {
    RawResponse {
        status: 400,
        headers: vec![("x-amzn-requestid", "8c1d-request-id")],
        body: r#"{"__type":"ThrottlingException","message":"Rate exceeded"}"#,
    }
}

#[test]
fn test_service_error_uses_code_and_message() {
    let service = DetectSentimentError::generic(
        ErrorMetadata::builder()
            .code("ThrottlingException")
            .message("Rate exceeded")
            .build(),
    );
    let sdk_error = SdkError::service_error(service, throttled_response());

    match ClassifierError::from(sdk_error) {
        ClassifierError::Service(msg) => assert_eq!(msg, "ThrottlingException: Rate exceeded"),
        other => panic!("Unexpected error type: {other:?}"),
    }
}

#[test]
fn test_service_error_without_code_uses_message() {
    let service =
        DetectSentimentError::generic(ErrorMetadata::builder().message("Input too long").build());
    let sdk_error = SdkError::service_error(service, throttled_response());

    assert_eq!(ClassifierError::from(sdk_error).to_string(), "Input too long");
}

#[test]
fn test_non_service_error_uses_display_chain() {
    let sdk_error: SdkError<DetectSentimentError, RawResponse> =
        SdkError::construction_failure(std::io::Error::other("invalid text parameter"));
    let message = ClassifierError::from(sdk_error).to_string();

    assert!(message.ends_with(": invalid text parameter"), "got {message:?}");
    assert!(!message.contains("ConstructionFailure"));
}

//! API Lambda handler for sentiment requests.
//!
//! This module handles:
//! - CORS preflight requests
//! - Request body parsing and `text` validation
//! - Delegating classification to the injected [`SentimentClassifier`]
//! - Mapping every outcome to a proxy response (200, 400 or 500)

use lambda_runtime::{Error, LambdaEvent};
use serde_json::{Value, json};
use tracing::{error, info, warn};

use super::{helpers, parsing};
use crate::classifier::SentimentClassifier;
use crate::core::models::Classification;
use crate::errors::HandlerError;

pub use self::function_handler as handler;

/// Language hint sent with every classification request.
pub const LANGUAGE_CODE: &str = "en";

/// Lambda handler for the API entrypoint.
///
/// Always resolves to `Ok`: validation and classifier failures are turned
/// into error responses rather than invocation errors.
///
/// # Errors
///
/// Never returns an error; the `Result` is required by `lambda_runtime`.
#[tracing::instrument(
    level = "info",
    skip(classifier, event),
    fields(request_id = %event.context.request_id)
)]
pub async fn function_handler<C>(
    classifier: &C,
    event: LambdaEvent<Value>,
) -> Result<Value, Error>
where
    C: SentimentClassifier + ?Sized,
{
    Ok(handle_request(classifier, &event.payload).await)
}

/// Builds the proxy response for one invocation payload.
pub async fn handle_request<C>(classifier: &C, payload: &Value) -> Value
where
    C: SentimentClassifier + ?Sized,
{
    info!(
        method = parsing::request_method(payload).unwrap_or("-"),
        body_len = parsing::body_len(payload),
        "API Lambda received request"
    );

    if parsing::is_preflight(payload) {
        return helpers::preflight();
    }

    match classify_request(classifier, payload).await {
        Ok(classification) => {
            info!(sentiment = %classification.label, "Classification succeeded");
            helpers::ok_json(&json!(classification))
        }
        Err(e @ HandlerError::NoText) => {
            warn!("Rejecting request: {}", e);
            helpers::err_response(e.status_code(), &e.to_string())
        }
        Err(e) => {
            error!("Failed to classify sentiment: {}", e);
            helpers::err_response(e.status_code(), &e.to_string())
        }
    }
}

async fn classify_request<C>(
    classifier: &C,
    payload: &Value,
) -> Result<Classification, HandlerError>
where
    C: SentimentClassifier + ?Sized,
{
    let text = parsing::extract_text(payload);
    if text.is_empty() {
        return Err(HandlerError::NoText);
    }

    Ok(classifier.classify(&text, LANGUAGE_CODE).await?)
}

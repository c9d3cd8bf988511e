//! Sentiment Lambda - an HTTP-triggered function that classifies text sentiment.
//!
//! This crate implements a single API Lambda sitting behind an API Gateway proxy
//! integration:
//! 1. The handler extracts `text` from the JSON request body
//! 2. The text is sent to Amazon Comprehend `DetectSentiment` (language `en`)
//! 3. The label and per-label scores are returned with CORS headers
//!
//! # Architecture
//!
//! The system uses:
//! - AWS Lambda for serverless execution
//! - Amazon Comprehend for sentiment classification
//! - A `SentimentClassifier` trait so the handler can run against test doubles
//! - Tokio for async runtime
//!
//! # Example
//!
//! ```no_run
//! use sentiment_lambda::api::handler::handle_request;
//! use sentiment_lambda::classifier::ComprehendClassifier;
//! use sentiment_lambda::core::config::AppConfig;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Set up structured logging
//!     sentiment_lambda::setup_logging();
//!
//!     let config = AppConfig::from_env()?;
//!     let classifier = ComprehendClassifier::from_config(&config).await;
//!
//!     let payload = serde_json::json!({
//!         "body": r#"{"text": "I love this"}"#
//!     });
//!     let response = handle_request(&classifier, &payload).await;
//!
//!     println!("{}: {}", response["statusCode"], response["body"]);
//!     Ok(())
//! }
//! ```

// Module declarations
pub mod api;
pub mod classifier;
pub mod core;
pub mod errors;

pub use classifier::{ComprehendClassifier, SentimentClassifier};
pub use errors::{ClassifierError, HandlerError};

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. The level is taken from `RUST_LOG` and
/// defaults to `info`. Calling it more than once is a no-op.
///
/// # Example
///
/// ```
/// // Initialize structured logging at the start of your Lambda handler
/// sentiment_lambda::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

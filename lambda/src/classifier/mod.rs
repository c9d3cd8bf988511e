//! Sentiment classifier abstraction
//!
//! The handler only depends on [`SentimentClassifier`], so the Comprehend
//! backend can be swapped for a test double.

pub mod comprehend;

use async_trait::async_trait;

use crate::core::models::Classification;
use crate::errors::ClassifierError;

pub use comprehend::ComprehendClassifier;

/// A backend that labels text as positive, negative, neutral or mixed.
#[async_trait]
pub trait SentimentClassifier: Send + Sync {
    /// Classify `text` written in `language_code` (an ISO 639-1 code such as `en`).
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects the input, is throttled, or
    /// cannot be reached.
    async fn classify(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Classification, ClassifierError>;
}

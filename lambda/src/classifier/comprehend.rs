use async_trait::async_trait;
use aws_sdk_comprehend::Client as ComprehendClient;
use aws_sdk_comprehend::error::DisplayErrorContext;
use aws_sdk_comprehend::operation::detect_sentiment::DetectSentimentOutput;
use aws_sdk_comprehend::types::LanguageCode;
use std::collections::BTreeMap;
use tracing::{debug, error};

use super::SentimentClassifier;
use crate::core::{config::AppConfig, models::Classification};
use crate::errors::ClassifierError;

/// Classifier backed by Amazon Comprehend `DetectSentiment`.
#[derive(Debug, Clone)]
pub struct ComprehendClassifier {
    client: ComprehendClient,
}

impl ComprehendClassifier {
    pub fn new(client: ComprehendClient) -> Self {
        Self { client }
    }

    /// Builds a client from the default AWS provider chain, applying the
    /// endpoint override from `config` when present.
    pub async fn from_config(config: &AppConfig) -> Self {
        let mut loader = aws_config::from_env();
        if let Some(endpoint) = &config.comprehend_endpoint_url {
            loader = loader.endpoint_url(endpoint);
        }
        let shared_config = loader.load().await;
        Self::new(ComprehendClient::new(&shared_config))
    }
}

#[async_trait]
impl SentimentClassifier for ComprehendClassifier {
    async fn classify(
        &self,
        text: &str,
        language_code: &str,
    ) -> Result<Classification, ClassifierError> {
        debug!(language_code, text_bytes = text.len(), "Calling DetectSentiment");

        let output = self
            .client
            .detect_sentiment()
            .text(text)
            .language_code(LanguageCode::from(language_code))
            .send()
            .await
            .map_err(|e| {
                error!("DetectSentiment failed: {}", DisplayErrorContext(&e));
                ClassifierError::from(e)
            })?;

        classification_from_output(&output)
    }
}

fn classification_from_output(
    output: &DetectSentimentOutput,
) -> Result<Classification, ClassifierError> {
    let label = output
        .sentiment()
        .map(|s| s.as_str().to_string())
        .ok_or_else(|| {
            ClassifierError::MalformedResponse("DetectSentiment returned no Sentiment".to_string())
        })?;

    let mut scores = BTreeMap::new();
    if let Some(score) = output.sentiment_score() {
        let entries = [
            ("Positive", score.positive()),
            ("Negative", score.negative()),
            ("Neutral", score.neutral()),
            ("Mixed", score.mixed()),
        ];
        for (name, value) in entries {
            if let Some(value) = value {
                scores.insert(name.to_string(), f64::from(value));
            }
        }
    }

    Ok(Classification { label, scores })
}

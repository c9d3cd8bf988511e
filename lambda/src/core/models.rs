use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Sentiment label and per-label confidence scores for one piece of text.
///
/// Serializes with the field names API clients already consume:
/// `{"Sentiment": "POSITIVE", "SentimentScore": {"Positive": 0.99, ...}}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classification {
    #[serde(rename = "Sentiment")]
    pub label: String,
    #[serde(rename = "SentimentScore")]
    pub scores: BTreeMap<String, f64>,
}

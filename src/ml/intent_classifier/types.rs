//! Common types for intent classification.

use serde::{Deserialize, Serialize};

/// Training sample for intent classification.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentSample {
    /// Example phrasing.
    pub query: String,
    /// Intent tag.
    pub intent: String,
}

/// The outcome of classifying one message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Best-scoring tag.
    pub tag: String,
    /// Softmax probability of `tag`.
    pub confidence: f64,
    /// Whether the message shared at least one term with the training
    /// vocabulary. When false the prediction rests on the intercepts alone.
    pub in_vocabulary: bool,
}

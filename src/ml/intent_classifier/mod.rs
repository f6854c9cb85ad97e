//! Intent classification with TF-IDF features and logistic regression.
//!
//! # Architecture
//!
//! - `TfIdfVectorizer`: feature extraction (`fit`, `transform`)
//! - `LogisticRegression`: multinomial linear model (`train`, `predict`)
//! - `IntentClassifier` trait: text in, [`Prediction`] out
//! - `MLBasedIntentClassifier`: vectorizer + model behind the trait
//!
//! # Example
//!
//! ```rust
//! use lingobot::ml::intent_classifier::{
//!     IntentClassifier, IntentSample, LogisticRegressionConfig, MLBasedIntentClassifier,
//! };
//! use lingobot::analysis::analyzer::StandardAnalyzer;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let samples = vec![
//!     IntentSample { query: "hello".to_string(), intent: "greeting".to_string() },
//!     IntentSample { query: "goodbye".to_string(), intent: "farewell".to_string() },
//! ];
//!
//! let analyzer = Arc::new(StandardAnalyzer::new()?);
//! let classifier =
//!     MLBasedIntentClassifier::new(samples, analyzer, &LogisticRegressionConfig::default())?;
//!
//! assert_eq!(classifier.predict("hello")?.tag, "greeting");
//! # Ok(())
//! # }
//! ```

mod classifier;
mod core;
mod logistic;
mod ml_classifier;
mod tfidf;
mod types;

// Public exports
pub use classifier::IntentClassifier;
pub use self::core::train_from_catalog;
pub use logistic::{LogisticRegression, LogisticRegressionConfig, TrainingStats};
pub use ml_classifier::MLBasedIntentClassifier;
pub use tfidf::TfIdfVectorizer;
pub use types::{IntentSample, Prediction};

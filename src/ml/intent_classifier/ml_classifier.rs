//! Machine learning-based intent classifier using TF-IDF and logistic regression.

use std::sync::Arc;

use log::info;

use crate::analysis::analyzer::Analyzer;
use crate::error::{LingobotError, Result};

use super::classifier::IntentClassifier;
use super::logistic::{LogisticRegression, LogisticRegressionConfig};
use super::tfidf::TfIdfVectorizer;
use super::types::{IntentSample, Prediction};

/// Machine learning-based intent classifier.
///
/// Both parts are fitted once in [`new`](Self::new) and read-only afterwards.
#[derive(Debug)]
pub struct MLBasedIntentClassifier {
    /// TF-IDF vectorizer.
    vectorizer: TfIdfVectorizer,
    /// Trained multinomial model over the vectorizer's features.
    model: LogisticRegression,
}

impl MLBasedIntentClassifier {
    /// Create a new ML intent classifier and train it from samples with a specified analyzer.
    pub fn new(
        samples: Vec<IntentSample>,
        analyzer: Arc<dyn Analyzer>,
        config: &LogisticRegressionConfig,
    ) -> Result<Self> {
        if samples.is_empty() {
            return Err(LingobotError::training("Training samples cannot be empty"));
        }

        let (documents, labels): (Vec<String>, Vec<String>) = samples
            .into_iter()
            .map(|sample| (sample.query, sample.intent))
            .unzip();

        let mut vectorizer = TfIdfVectorizer::new(analyzer);
        vectorizer.fit(&documents)?;

        let features = vectorizer.transform_batch(&documents)?;
        let model = LogisticRegression::train(&features, &labels, config)?;

        let stats = model.training_stats();
        info!(
            "Trained intent classifier: {} samples, {} intents, {} terms, {} iterations (converged: {})",
            documents.len(),
            model.classes().len(),
            vectorizer.vocabulary_size(),
            stats.iterations,
            stats.converged
        );

        Ok(Self { vectorizer, model })
    }

    pub fn vectorizer(&self) -> &TfIdfVectorizer {
        &self.vectorizer
    }

    pub fn model(&self) -> &LogisticRegression {
        &self.model
    }
}

impl IntentClassifier for MLBasedIntentClassifier {
    fn predict(&self, text: &str) -> Result<Prediction> {
        let features = self.vectorizer.transform(text)?;
        let in_vocabulary = features.iter().any(|&w| w != 0.0);
        let (tag, confidence) = self.model.predict_with_confidence(&features)?;

        Ok(Prediction {
            tag: tag.to_string(),
            confidence,
            in_vocabulary,
        })
    }

    fn tags(&self) -> &[String] {
        self.model.classes()
    }

    fn name(&self) -> &str {
        "tfidf_logistic"
    }
}

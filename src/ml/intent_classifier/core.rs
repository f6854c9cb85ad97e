//! Helper functions for creating intent classifiers.

use std::sync::Arc;

use crate::analysis::analyzer::StandardAnalyzer;
use crate::catalog::IntentCatalog;
use crate::error::Result;
use crate::ml::intent_classifier::logistic::LogisticRegressionConfig;
use crate::ml::intent_classifier::ml_classifier::MLBasedIntentClassifier;

/// Train a classifier on every pattern of a catalog with the standard analyzer.
pub fn train_from_catalog(
    catalog: &IntentCatalog,
    config: &LogisticRegressionConfig,
) -> Result<MLBasedIntentClassifier> {
    let analyzer = Arc::new(StandardAnalyzer::new()?);
    MLBasedIntentClassifier::new(catalog.training_samples(), analyzer, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ml::intent_classifier::IntentClassifier;

    #[test]
    fn test_train_from_catalog() {
        let catalog = IntentCatalog::from_json_str(
            r#"[
                {"tag": "greeting", "patterns": ["hello", "hi"], "responses": ["Hi there!"]},
                {"tag": "farewell", "patterns": ["goodbye", "see you"], "responses": ["Bye!"]}
            ]"#,
        )
        .unwrap();

        let classifier =
            train_from_catalog(&catalog, &LogisticRegressionConfig::default()).unwrap();

        assert_eq!(classifier.tags(), &["farewell", "greeting"]);
        assert_eq!(classifier.predict("hello").unwrap().tag, "greeting");
        assert_eq!(classifier.predict("goodbye").unwrap().tag, "farewell");
    }
}

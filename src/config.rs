//! Runtime configuration.
//!
//! Everything has a default; the CLI overrides individual values from flags
//! and environment variables. The catalog path is the only file input.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{LingobotError, Result};
use crate::ml::intent_classifier::LogisticRegressionConfig;
use crate::translation::{GoogleTranslatorConfig, Language, PIVOT_LANGUAGE};

/// Reply used when a turn fails. `{error}` is replaced by the failure detail.
pub const DEFAULT_FALLBACK_MESSAGE: &str =
    "I couldn't process your request. Please try again. ({error})";

/// Reply used when a confidence floor is configured and not met.
pub const DEFAULT_NOT_UNDERSTOOD_MESSAGE: &str =
    "I'm not sure I understood that. Could you rephrase your question?";

/// Which translation backend to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TranslatorBackend {
    #[default]
    Google,
    Identity,
}

/// Classifier settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// Model hyperparameters.
    pub model: LogisticRegressionConfig,
    /// Minimum top-class probability to accept a prediction. `None` accepts
    /// every prediction.
    pub min_confidence: Option<f64>,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            model: LogisticRegressionConfig::default(),
            min_confidence: None,
        }
    }
}

/// Translation settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TranslationConfig {
    pub backend: TranslatorBackend,
    pub google: GoogleTranslatorConfig,
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatbotConfig {
    /// Path of the intents JSON file.
    pub catalog_path: PathBuf,
    /// Language all messages are classified in.
    pub pivot_language: Language,
    pub classifier: ClassifierConfig,
    pub translation: TranslationConfig,
    /// Seed for response selection. `None` draws from the thread RNG.
    pub response_seed: Option<u64>,
    /// Template for failed turns; must contain `{error}`.
    pub fallback_message: String,
    pub not_understood_message: String,
}

impl Default for ChatbotConfig {
    fn default() -> Self {
        Self {
            catalog_path: PathBuf::from("intents.json"),
            pivot_language: PIVOT_LANGUAGE,
            classifier: ClassifierConfig::default(),
            translation: TranslationConfig::default(),
            response_seed: None,
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
            not_understood_message: DEFAULT_NOT_UNDERSTOOD_MESSAGE.to_string(),
        }
    }
}

impl ChatbotConfig {
    /// Reject values that would make startup or every turn fail.
    pub fn validate(&self) -> Result<()> {
        let model = &self.classifier.model;
        if model.c.is_nan() || model.c <= 0.0 {
            return Err(LingobotError::config("classifier c must be positive"));
        }
        if model.learning_rate.is_nan() || model.learning_rate <= 0.0 {
            return Err(LingobotError::config("learning rate must be positive"));
        }
        if model.max_iter == 0 {
            return Err(LingobotError::config("max_iter must be at least 1"));
        }
        if let Some(floor) = self.classifier.min_confidence
            && !(0.0..=1.0).contains(&floor)
        {
            return Err(LingobotError::config(format!(
                "min_confidence must be within 0..=1, got {floor}"
            )));
        }
        if self.translation.google.timeout_secs == 0 {
            return Err(LingobotError::config("translation timeout must be at least 1 second"));
        }
        if !self.fallback_message.contains("{error}") {
            return Err(LingobotError::config(
                "fallback message must contain the {error} placeholder",
            ));
        }
        Ok(())
    }

    /// Render the fallback reply for a failure description.
    pub fn fallback_for(&self, error: &str) -> String {
        self.fallback_message.replace("{error}", error)
    }
}

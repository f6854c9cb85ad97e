//! Conversation pipeline: one request in, one reply out.

use std::sync::Arc;
use std::time::Instant;

use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};

use crate::catalog::IntentCatalog;
use crate::config::{ChatbotConfig, TranslatorBackend};
use crate::error::{LingobotError, Result};
use crate::ml::intent_classifier::{IntentClassifier, train_from_catalog};
use crate::response::ResponseFormatter;
use crate::session::ChatLog;
use crate::translation::{GoogleTranslator, IdentityTranslator, Translator};

use super::stage::PipelineStage;

/// The outcome of a successful turn, with the classification trace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resolution {
    /// Predicted intent tag.
    pub tag: String,
    /// Probability of `tag`.
    pub confidence: f64,
    /// False when the message shared no term with the training vocabulary.
    pub in_vocabulary: bool,
    /// False when a confidence floor rejected the prediction and the
    /// not-understood message was sent instead of the intent's response.
    pub understood: bool,
    /// The message as it was classified, in the pivot language.
    pub pivot_text: String,
    /// Final stage reached.
    pub stage: PipelineStage,
    /// Reply in the user's language.
    pub response: String,
}

/// Translates, classifies, formats and translates back.
///
/// The catalog and classifier are immutable after construction and shared
/// through `Arc`, so one pipeline can serve any number of sessions.
pub struct ConversationPipeline {
    catalog: Arc<IntentCatalog>,
    classifier: Arc<dyn IntentClassifier>,
    translator: Arc<dyn Translator>,
    formatter: ResponseFormatter,
    config: ChatbotConfig,
}

impl std::fmt::Debug for ConversationPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConversationPipeline")
            .field("intents", &self.catalog.len())
            .field("classifier", &self.classifier.name())
            .field("translator", &self.translator.name())
            .field("formatter", &self.formatter)
            .finish()
    }
}

impl ConversationPipeline {
    pub fn new(
        catalog: Arc<IntentCatalog>,
        classifier: Arc<dyn IntentClassifier>,
        translator: Arc<dyn Translator>,
        formatter: ResponseFormatter,
        config: ChatbotConfig,
    ) -> Self {
        Self {
            catalog,
            classifier,
            translator,
            formatter,
            config,
        }
    }

    /// Load the catalog, train the classifier and pick the translator
    /// described by `config`. Every error here is fatal for startup.
    pub fn from_config(config: ChatbotConfig) -> Result<Self> {
        config.validate()?;

        let catalog = IntentCatalog::load(&config.catalog_path)?;
        let translator = Self::translator_for(&config);
        Self::from_catalog(catalog, translator, config)
    }

    /// Train on an already loaded catalog.
    pub fn from_catalog(
        catalog: IntentCatalog,
        translator: Arc<dyn Translator>,
        config: ChatbotConfig,
    ) -> Result<Self> {
        let start = Instant::now();
        let classifier = train_from_catalog(&catalog, &config.classifier.model)?;
        info!(
            "Pipeline ready in {} ms ({} intents, translator: {})",
            start.elapsed().as_millis(),
            catalog.len(),
            translator.name()
        );

        let formatter = ResponseFormatter::from_seed(config.response_seed);
        Ok(Self::new(
            Arc::new(catalog),
            Arc::new(classifier),
            translator,
            formatter,
            config,
        ))
    }

    /// The translator configured by `config.translation`.
    pub fn translator_for(config: &ChatbotConfig) -> Arc<dyn Translator> {
        match config.translation.backend {
            TranslatorBackend::Google => {
                Arc::new(GoogleTranslator::new(&config.translation.google))
            }
            TranslatorBackend::Identity => Arc::new(IdentityTranslator::new()),
        }
    }

    pub fn catalog(&self) -> &IntentCatalog {
        &self.catalog
    }

    pub fn classifier(&self) -> &dyn IntentClassifier {
        self.classifier.as_ref()
    }

    pub fn translator(&self) -> &dyn Translator {
        self.translator.as_ref()
    }

    pub fn config(&self) -> &ChatbotConfig {
        &self.config
    }

    /// Produce a reply for `text` written in `language`.
    ///
    /// Never fails: any per-turn error becomes the fallback reply carrying
    /// the error description.
    pub fn respond(&self, text: &str, language: &str) -> String {
        match self.resolve(text, language) {
            Ok(resolution) => resolution.response,
            Err(e) => self.fallback_for_error(&e),
        }
    }

    /// Log a per-turn failure and render the fallback reply for it.
    pub fn fallback_for_error(&self, e: &LingobotError) -> String {
        self.log_failure(e);
        self.config.fallback_for(&e.to_string())
    }

    /// Append the user's message and the reply to `log`, returning the reply.
    pub fn converse(&self, log: &mut ChatLog, text: &str, language: &str) -> String {
        log.push_user(text);
        let reply = self.respond(text, language);
        log.push_bot(reply.clone());
        reply
    }

    /// Run one turn, returning the error instead of the fallback reply.
    pub fn resolve(&self, text: &str, language: &str) -> Result<Resolution> {
        let pivot = self.config.pivot_language.code();
        let mut stage = PipelineStage::ReceivedInput;
        debug!("[{stage}] {} chars in '{language}'", text.len());

        let pivot_text = self.translator.translate(text, language, pivot)?;
        stage = PipelineStage::TranslatedToPivot;
        debug!("[{stage}] {pivot_text:?}");

        let prediction = self.classifier.predict(&pivot_text.to_lowercase())?;
        stage = PipelineStage::Classified;
        debug!(
            "[{stage}] tag={} confidence={:.4} in_vocabulary={}",
            prediction.tag, prediction.confidence, prediction.in_vocabulary
        );

        let understood = self
            .config
            .classifier
            .min_confidence
            .is_none_or(|floor| prediction.confidence >= floor);

        let reply = if understood {
            let intent = self.catalog.get(&prediction.tag).ok_or_else(|| {
                LingobotError::internal(format!(
                    "predicted tag '{}' has no catalog entry",
                    prediction.tag
                ))
            })?;
            stage = PipelineStage::ResolvedIntent;
            debug!("[{stage}] {}", intent.tag);

            let reply = self.formatter.format(intent);
            stage = PipelineStage::Formatted;
            debug!("[{stage}] {} chars", reply.len());
            reply
        } else {
            debug!(
                "Confidence {:.4} below floor, replying with not-understood message",
                prediction.confidence
            );
            self.config.not_understood_message.clone()
        };

        let response = self.translator.translate(&reply, pivot, language)?;
        stage = PipelineStage::TranslatedToUser;
        debug!("[{stage}] {} chars", response.len());

        stage = PipelineStage::Done;
        Ok(Resolution {
            tag: prediction.tag,
            confidence: prediction.confidence,
            in_vocabulary: prediction.in_vocabulary,
            understood,
            pivot_text,
            stage,
            response,
        })
    }

    fn log_failure(&self, e: &LingobotError) {
        match e {
            LingobotError::Translation(_) => {
                warn!("[{}] translation failed: {e}", PipelineStage::Failed)
            }
            LingobotError::InternalConsistency(_) => {
                error!("[{}] catalog and classifier disagree: {e}", PipelineStage::Failed)
            }
            _ => error!("[{}] {e}", PipelineStage::Failed),
        }
    }
}

//! # Lingobot
//!
//! A multilingual, intent-based chatbot for job interview preparation.
//!
//! ## Features
//!
//! - JSON intent catalog with optional examples and resources
//! - TF-IDF features and a multinomial logistic regression classifier
//! - Pluggable translation gateway with a Google Translate backend
//! - Per-turn fallback replies instead of errors
//! - Interactive command line shell

pub mod analysis;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod error;
pub mod ml;
pub mod pipeline;
pub mod response;
pub mod session;
pub mod translation;

pub mod prelude {
    pub use crate::catalog::{IntentCatalog, IntentRecord};
    pub use crate::config::ChatbotConfig;
    pub use crate::error::{LingobotError, Result};
    pub use crate::ml::intent_classifier::{IntentClassifier, MLBasedIntentClassifier};
    pub use crate::pipeline::{ConversationPipeline, Resolution};
    pub use crate::response::ResponseFormatter;
    pub use crate::session::{ChatLog, Session};
    pub use crate::translation::{Language, Translator};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

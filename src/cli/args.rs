//! Command line argument parsing for the Lingobot CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

use crate::config::{ChatbotConfig, TranslatorBackend};

/// Lingobot - a multilingual job interview preparation chatbot
#[derive(Parser, Debug, Clone)]
#[command(name = "lingobot")]
#[command(about = "A multilingual intent-based chatbot for job interview preparation")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LingobotArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Path to the intents JSON file
    #[arg(
        long,
        env = "LINGOBOT_CATALOG",
        default_value = "intents.json",
        global = true
    )]
    pub catalog: PathBuf,

    /// Translation backend
    #[arg(
        long,
        env = "LINGOBOT_TRANSLATOR",
        default_value = "google",
        global = true
    )]
    pub translator: TranslatorArg,

    /// Base URL of the translation service
    #[arg(long, env = "LINGOBOT_TRANSLATE_URL", global = true)]
    pub translate_url: Option<String>,

    /// Translation request timeout in seconds
    #[arg(long, default_value = "10", global = true)]
    pub timeout: u64,

    /// Seed for classifier initialisation
    #[arg(long, default_value = "0", global = true)]
    pub seed: u64,

    /// Seed for response selection (random when omitted)
    #[arg(long, global = true)]
    pub response_seed: Option<u64>,

    /// Reject predictions below this probability
    #[arg(long, global = true)]
    pub min_confidence: Option<f64>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LingobotArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Build the runtime configuration from the flags.
    pub fn chatbot_config(&self) -> ChatbotConfig {
        let mut config = ChatbotConfig {
            catalog_path: self.catalog.clone(),
            response_seed: self.response_seed,
            ..ChatbotConfig::default()
        };
        config.classifier.model.seed = self.seed;
        config.classifier.min_confidence = self.min_confidence;
        config.translation.backend = self.translator.into();
        config.translation.google.timeout_secs = self.timeout;
        if let Some(url) = &self.translate_url {
            config.translation.google.base_url = url.clone();
        }
        config
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Start an interactive chat session
    Chat(ChatArgs),

    /// Ask a single question and print the reply
    Ask(AskArgs),

    /// Classify a message without translation
    Classify(ClassifyArgs),

    /// List the intents of the catalog
    Intents,

    /// Load the catalog and train the classifier, then report statistics
    Validate,
}

/// Arguments for the interactive chat
#[derive(Parser, Debug, Clone)]
pub struct ChatArgs {
    /// Language code of the conversation (en, es, fr, hi, de, zh-cn)
    #[arg(short, long, default_value = "en")]
    pub lang: String,

    /// File shown by the :about command
    #[arg(long, default_value = "README.md")]
    pub readme: PathBuf,
}

/// Arguments for a one-shot question
#[derive(Parser, Debug, Clone)]
pub struct AskArgs {
    /// The question to ask
    #[arg(value_name = "TEXT")]
    pub text: String,

    /// Language code of the question
    #[arg(short, long, default_value = "en")]
    pub lang: String,
}

/// Arguments for classification
#[derive(Parser, Debug, Clone)]
pub struct ClassifyArgs {
    /// Message in the pivot language
    #[arg(value_name = "TEXT")]
    pub text: String,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Translation backends selectable from the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslatorArg {
    /// Public Google Translate endpoint
    Google,
    /// No translation (offline)
    Identity,
}

impl From<TranslatorArg> for TranslatorBackend {
    fn from(arg: TranslatorArg) -> Self {
        match arg {
            TranslatorArg::Google => TranslatorBackend::Google,
            TranslatorArg::Identity => TranslatorBackend::Identity,
        }
    }
}

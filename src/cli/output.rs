//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};

use crate::catalog::{CatalogStats, IntentRecord};
use crate::cli::args::{LingobotArgs, OutputFormat};
use crate::error::Result;
use crate::ml::intent_classifier::Prediction;
use crate::pipeline::Resolution;

/// Human-readable rendering of a command result.
///
/// The default lists the top-level fields as `key: value` lines.
pub trait HumanOutput: Serialize {
    fn human(&self) -> Result<String> {
        let value = serde_json::to_value(self)?;
        Ok(format_generic(&value))
    }
}

/// Result of the `ask` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct AskResult {
    pub language: String,
    #[serde(flatten)]
    pub resolution: Option<Resolution>,
    /// Present when the turn failed and the fallback reply was produced.
    pub error: Option<String>,
    pub reply: String,
}

impl HumanOutput for AskResult {
    fn human(&self) -> Result<String> {
        Ok(self.reply.clone())
    }
}

/// Result of the `classify` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub text: String,
    #[serde(flatten)]
    pub prediction: Prediction,
}

impl HumanOutput for ClassificationResult {
    fn human(&self) -> Result<String> {
        let mut out = format!(
            "{} (confidence: {:.3})",
            self.prediction.tag, self.prediction.confidence
        );
        if !self.prediction.in_vocabulary {
            out.push_str("\nNo known words in the message; prediction is a prior guess.");
        }
        Ok(out)
    }
}

/// One row of the `intents` listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct IntentSummary {
    pub tag: String,
    pub patterns: usize,
    pub responses: usize,
    pub examples: usize,
    pub resources: usize,
}

impl From<&IntentRecord> for IntentSummary {
    fn from(intent: &IntentRecord) -> Self {
        Self {
            tag: intent.tag.clone(),
            patterns: intent.patterns.len(),
            responses: intent.responses.len(),
            examples: intent.examples().len(),
            resources: intent.resources().len(),
        }
    }
}

/// Result of the `intents` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct IntentListing {
    pub intents: Vec<IntentSummary>,
}

impl HumanOutput for IntentListing {
    fn human(&self) -> Result<String> {
        let width = self
            .intents
            .iter()
            .map(|i| i.tag.len())
            .max()
            .unwrap_or(0)
            .max(3);

        let mut lines = vec![format!(
            "{:<width$}  {:>8}  {:>9}  {:>8}  {:>9}",
            "TAG", "PATTERNS", "RESPONSES", "EXAMPLES", "RESOURCES"
        )];
        for intent in &self.intents {
            lines.push(format!(
                "{:<width$}  {:>8}  {:>9}  {:>8}  {:>9}",
                intent.tag, intent.patterns, intent.responses, intent.examples, intent.resources
            ));
        }
        Ok(lines.join("\n"))
    }
}

/// Result of the `validate` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct ValidationResult {
    pub catalog: String,
    #[serde(flatten)]
    pub stats: CatalogStats,
    pub vocabulary_size: usize,
    pub iterations: usize,
    pub converged: bool,
    pub final_loss: f64,
    pub training_time_ms: u64,
}

impl HumanOutput for ValidationResult {}

/// Output a result in the specified format.
pub fn output_result<T: HumanOutput>(message: &str, result: &T, args: &LingobotArgs) -> Result<()> {
    if args.output_format == OutputFormat::Human && args.verbosity() > 1 {
        println!("{message}");
        println!();
    }
    println!("{}", render(result, args)?);
    Ok(())
}

/// Render a result without printing it.
pub fn render<T: HumanOutput>(result: &T, args: &LingobotArgs) -> Result<String> {
    match args.output_format {
        OutputFormat::Human => result.human(),
        OutputFormat::Json => {
            let json = if args.pretty {
                serde_json::to_string_pretty(result)?
            } else {
                serde_json::to_string(result)?
            };
            Ok(json)
        }
    }
}

fn format_generic(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Object(obj) => obj
            .iter()
            .map(|(key, val)| format!("{key}: {}", format_value(val)))
            .collect::<Vec<_>>()
            .join("\n"),
        _ => format_value(value),
    }
}

/// Format a JSON value for human display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}

//! Command implementations for the Lingobot CLI.

use std::io;
use std::sync::Arc;

use anyhow::{Context, Result};
use log::info;

use crate::catalog::IntentCatalog;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::cli::shell::ChatShell;
use crate::config::ChatbotConfig;
use crate::ml::intent_classifier::{IntentClassifier, train_from_catalog};
use crate::pipeline::ConversationPipeline;
use crate::translation::Language;

/// Execute a CLI command.
pub fn execute_command(args: LingobotArgs) -> Result<()> {
    match &args.command {
        Command::Chat(chat_args) => chat(chat_args.clone(), &args),
        Command::Ask(ask_args) => ask(ask_args.clone(), &args),
        Command::Classify(classify_args) => classify(classify_args.clone(), &args),
        Command::Intents => list_intents(&args),
        Command::Validate => validate(&args),
    }
}

fn validated_config(args: &LingobotArgs) -> Result<ChatbotConfig> {
    let config = args.chatbot_config();
    config.validate().context("Invalid command line options")?;
    Ok(config)
}

fn load_catalog(config: &ChatbotConfig) -> Result<IntentCatalog> {
    IntentCatalog::load(&config.catalog_path).with_context(|| {
        format!(
            "Could not load the intents file {}",
            config.catalog_path.display()
        )
    })
}

fn build_pipeline(config: ChatbotConfig) -> Result<ConversationPipeline> {
    let catalog = load_catalog(&config)?;
    let translator = ConversationPipeline::translator_for(&config);
    ConversationPipeline::from_catalog(catalog, translator, config)
        .context("Could not train the intent classifier")
}

/// Run the interactive chat loop on stdin/stdout.
fn chat(args: ChatArgs, cli_args: &LingobotArgs) -> Result<()> {
    let language = Language::from_code(&args.lang)
        .with_context(|| format!("Unsupported language '{}'", args.lang))?;
    let pipeline = build_pipeline(validated_config(cli_args)?)?;

    let mut shell = ChatShell::new(&pipeline, language, args.readme);
    info!("Chat session {} started", shell.session().id);

    let stdin = io::stdin();
    shell
        .run(stdin.lock(), io::stdout())
        .context("Terminal I/O failed")?;

    info!(
        "Chat session {} ended after {} turns",
        shell.session().id,
        shell.session().chat_log.len()
    );
    Ok(())
}

/// Answer one question.
fn ask(args: AskArgs, cli_args: &LingobotArgs) -> Result<()> {
    let pipeline = build_pipeline(validated_config(cli_args)?)?;
    let result = answer(&pipeline, args.text, args.lang);

    output_result("Reply", &result, cli_args)?;
    Ok(())
}

fn answer(pipeline: &ConversationPipeline, text: String, language: String) -> AskResult {
    match pipeline.resolve(&text, &language) {
        Ok(resolution) => AskResult {
            language,
            reply: resolution.response.clone(),
            resolution: Some(resolution),
            error: None,
        },
        Err(e) => AskResult {
            language,
            reply: pipeline.fallback_for_error(&e),
            resolution: None,
            error: Some(e.to_string()),
        },
    }
}

/// Classify a message in the pivot language, without translation.
fn classify(args: ClassifyArgs, cli_args: &LingobotArgs) -> Result<()> {
    let config = validated_config(cli_args)?;
    let catalog = load_catalog(&config)?;
    let classifier = train_from_catalog(&catalog, &config.classifier.model)
        .context("Could not train the intent classifier")?;

    let prediction = classifier.predict(&args.text.to_lowercase())?;
    output_result(
        "Classification",
        &ClassificationResult {
            text: args.text,
            prediction,
        },
        cli_args,
    )?;
    Ok(())
}

/// List the catalog's intents.
fn list_intents(cli_args: &LingobotArgs) -> Result<()> {
    let catalog = load_catalog(&cli_args.chatbot_config())?;

    let listing = IntentListing {
        intents: catalog.intents().iter().map(IntentSummary::from).collect(),
    };
    output_result(
        &format!("{} intents", catalog.len()),
        &listing,
        cli_args,
    )?;
    Ok(())
}

/// Load and train, then report what was found.
fn validate(cli_args: &LingobotArgs) -> Result<()> {
    let config = validated_config(cli_args)?;
    let catalog = load_catalog(&config)?;
    let classifier = train_from_catalog(&catalog, &config.classifier.model)
        .context("Could not train the intent classifier")?;

    let stats = classifier.model().training_stats();
    let result = ValidationResult {
        catalog: config.catalog_path.display().to_string(),
        stats: catalog.stats(),
        vocabulary_size: classifier.vectorizer().vocabulary_size(),
        iterations: stats.iterations,
        converged: stats.converged,
        final_loss: stats.final_loss,
        training_time_ms: stats.training_time_ms,
    };

    output_result("Catalog is valid", &result, cli_args)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use clap::Parser;

    use super::*;

    const CATALOG: &str = r#"[
        {"tag": "greeting", "patterns": ["Hi", "Hello"], "responses": ["Hi there!"]},
        {"tag": "goodbye", "patterns": ["Bye", "Goodbye"], "responses": ["Good luck!"]}
    ]"#;

    fn catalog_file() -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();
        file
    }

    fn args(catalog: &tempfile::NamedTempFile, command: &[&str]) -> LingobotArgs {
        let path = catalog.path().to_str().unwrap().to_string();
        let mut argv = vec![
            "lingobot".to_string(),
            "-q".to_string(),
            "--translator".to_string(),
            "identity".to_string(),
            "--catalog".to_string(),
            path,
        ];
        argv.extend(command.iter().map(|s| s.to_string()));
        LingobotArgs::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_validate_command() {
        let catalog = catalog_file();
        assert!(execute_command(args(&catalog, &["validate"])).is_ok());
    }

    #[test]
    fn test_ask_and_classify_commands() {
        let catalog = catalog_file();
        assert!(execute_command(args(&catalog, &["ask", "Hello"])).is_ok());
        assert!(execute_command(args(&catalog, &["classify", "Goodbye"])).is_ok());
        assert!(execute_command(args(&catalog, &["intents"])).is_ok());
    }

    #[test]
    fn test_ask_failure_renders_fallback() {
        let catalog = catalog_file();
        let config = args(&catalog, &["validate"]).chatbot_config();
        let pipeline = build_pipeline(config).unwrap();

        let result = answer(&pipeline, "Hello".to_string(), "xx".to_string());
        let error = result.error.unwrap();

        assert!(result.resolution.is_none());
        assert_eq!(result.reply, pipeline.config().fallback_for(&error));
        assert!(result.reply.contains("xx"));

        let result = answer(&pipeline, "Hello".to_string(), "en".to_string());
        assert_eq!(result.reply, "Hi there!");
        assert!(result.error.is_none());
    }

    #[test]
    fn test_missing_catalog_has_context() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("intents.json");
        let args = LingobotArgs::try_parse_from([
            "lingobot",
            "--catalog",
            path.to_str().unwrap(),
            "validate",
        ])
        .unwrap();

        let err = execute_command(args).unwrap_err();
        assert!(format!("{err:#}").contains("Intents file not found"));
    }

    #[test]
    fn test_invalid_options_rejected() {
        let catalog = catalog_file();
        let err = execute_command(args(&catalog, &["--min-confidence", "2", "validate"])).unwrap_err();
        assert!(err.to_string().contains("Invalid command line options"));
    }
}

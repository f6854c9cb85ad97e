use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use lingobot::catalog::IntentCatalog;
use lingobot::config::ChatbotConfig;
use lingobot::error::{LingobotError, Result};
use lingobot::ml::intent_classifier::{
    IntentClassifier, LogisticRegressionConfig, train_from_catalog,
};
use lingobot::pipeline::ConversationPipeline;
use lingobot::translation::IdentityTranslator;

fn shipped_catalog_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("intents.json")
}

#[test]
fn shipped_catalog_loads_and_trains() -> Result<()> {
    let catalog = IntentCatalog::load(shipped_catalog_path())?;
    let stats = catalog.stats();

    assert_eq!(stats.intents, catalog.tags().count());
    assert!(stats.patterns >= stats.intents);
    assert!(stats.with_examples > 0);
    assert!(stats.with_resources > 0);

    let classifier = train_from_catalog(&catalog, &LogisticRegressionConfig::default())?;
    assert_eq!(classifier.model().classes().len(), catalog.len());
    assert!(classifier.model().training_stats().final_loss.is_finite());
    Ok(())
}

#[test]
fn shipped_catalog_answers_interview_questions() -> Result<()> {
    let config = ChatbotConfig {
        catalog_path: shipped_catalog_path(),
        ..ChatbotConfig::default()
    };
    let catalog = IntentCatalog::load(&config.catalog_path)?;
    let pipeline =
        ConversationPipeline::from_catalog(catalog, Arc::new(IdentityTranslator::new()), config)?;

    let resolution = pipeline.resolve("What is your biggest weakness?", "en")?;
    assert_eq!(resolution.tag, "weaknesses");
    assert!(resolution.response.contains("\n\nExamples:\nQ: What is your biggest weakness? - A: "));

    let resolution = pipeline.resolve("How do I negotiate salary?", "en")?;
    assert_eq!(resolution.tag, "salary");
    assert!(resolution.response.contains("\n\nResources:\nSalary research: "));
    Ok(())
}

#[test]
fn shipped_catalog_patterns_classify_to_their_own_tag() -> Result<()> {
    let catalog = IntentCatalog::load(shipped_catalog_path())?;
    let classifier = train_from_catalog(&catalog, &LogisticRegressionConfig::default())?;

    let mut misclassified = Vec::new();
    for sample in catalog.training_samples() {
        let prediction = classifier.predict(&sample.query.to_lowercase())?;
        if prediction.tag != sample.intent {
            misclassified.push(format!(
                "{:?}: expected {}, got {}",
                sample.query, sample.intent, prediction.tag
            ));
        }
    }

    assert!(misclassified.is_empty(), "{misclassified:#?}");
    Ok(())
}

#[test]
fn duplicate_tags_are_rejected_at_load() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(
        br#"[
            {"tag": "greeting", "patterns": ["hello"], "responses": ["Hi"]},
            {"tag": "salary", "patterns": ["pay"], "responses": ["Research first"]},
            {"tag": "greeting", "patterns": ["hey"], "responses": ["Hey"]}
        ]"#,
    )
    .unwrap();

    let err = IntentCatalog::load(file.path()).unwrap_err();
    assert!(matches!(err, LingobotError::InvalidCatalog(_)));
}

#[test]
fn missing_and_malformed_files_are_distinct() {
    let dir = tempfile::TempDir::new().unwrap();
    let missing = IntentCatalog::load(dir.path().join("intents.json")).unwrap_err();
    assert!(missing.to_string().starts_with("Intents file not found"));

    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();
    let malformed = IntentCatalog::load(&path).unwrap_err();
    assert!(malformed.to_string().starts_with("Error decoding the intents file"));
}

#[test]
fn pipeline_from_config_uses_catalog_path() -> Result<()> {
    let config = ChatbotConfig {
        catalog_path: shipped_catalog_path(),
        translation: lingobot::config::TranslationConfig {
            backend: lingobot::config::TranslatorBackend::Identity,
            ..Default::default()
        },
        response_seed: Some(42),
        ..ChatbotConfig::default()
    };

    let pipeline = ConversationPipeline::from_config(config)?;
    assert_eq!(pipeline.translator().name(), "identity");
    assert!(pipeline.catalog().get("greeting").is_some());
    Ok(())
}

//! Criterion benchmarks for Lingobot.
//!
//! Covers the startup cost (fitting the vectorizer and training the
//! classifier) and the per-turn cost (analysis, classification and a full
//! offline pipeline turn).

use std::hint::black_box;
use std::sync::Arc;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use lingobot::analysis::analyzer::{Analyzer, StandardAnalyzer};
use lingobot::catalog::{IntentCatalog, IntentRecord};
use lingobot::config::ChatbotConfig;
use lingobot::ml::intent_classifier::{
    IntentClassifier, LogisticRegressionConfig, train_from_catalog,
};
use lingobot::pipeline::ConversationPipeline;
use lingobot::translation::IdentityTranslator;

const TOPICS: [&str; 16] = [
    "salary", "strengths", "weakness", "conflict", "teamwork", "deadline", "leadership",
    "failure", "relocation", "remote", "promotion", "feedback", "motivation", "career",
    "culture", "overtime",
];

const FRAMES: [&str; 6] = [
    "how do I answer questions about {}",
    "tell me about {}",
    "what should I say about my {}",
    "tips for talking about {}",
    "interview question on {}",
    "how to discuss {} in an interview",
];

/// A catalog with one intent per topic and one pattern per frame.
fn generate_catalog() -> IntentCatalog {
    let records = TOPICS
        .iter()
        .map(|topic| IntentRecord {
            tag: topic.to_string(),
            patterns: FRAMES.iter().map(|frame| frame.replace("{}", topic)).collect(),
            responses: vec![format!("Here is some advice about {topic}.")],
            additional_info: None,
        })
        .collect();

    IntentCatalog::from_records(records).unwrap()
}

fn bench_analysis(c: &mut Criterion) {
    let mut group = c.benchmark_group("analysis");
    let analyzer = StandardAnalyzer::new().unwrap();
    let text = "How do I answer questions about my greatest weakness in a technical interview?";

    group.bench_function("analyze_message", |b| {
        b.iter(|| black_box(analyzer.terms(black_box(text)).unwrap()))
    });

    group.finish();
}

fn bench_training(c: &mut Criterion) {
    let mut group = c.benchmark_group("training");
    group.sample_size(10);

    let catalog = generate_catalog();
    let config = LogisticRegressionConfig::default();

    group.throughput(Throughput::Elements(catalog.training_samples().len() as u64));
    group.bench_function("train_from_catalog", |b| {
        b.iter(|| black_box(train_from_catalog(black_box(&catalog), &config).unwrap()))
    });

    group.finish();
}

fn bench_classification(c: &mut Criterion) {
    let mut group = c.benchmark_group("classification");

    let catalog = generate_catalog();
    let classifier = train_from_catalog(&catalog, &LogisticRegressionConfig::default()).unwrap();
    let messages: Vec<String> = TOPICS
        .iter()
        .map(|topic| format!("what is a good way to handle {topic} questions"))
        .collect();

    group.throughput(Throughput::Elements(messages.len() as u64));
    group.bench_function("predict_batch", |b| {
        b.iter(|| {
            for message in &messages {
                black_box(classifier.predict(black_box(message)).unwrap());
            }
        })
    });

    let pipeline = ConversationPipeline::from_catalog(
        catalog,
        Arc::new(IdentityTranslator::new()),
        ChatbotConfig {
            response_seed: Some(0),
            ..ChatbotConfig::default()
        },
    )
    .unwrap();

    group.throughput(Throughput::Elements(1));
    group.bench_function("pipeline_turn", |b| {
        b.iter(|| black_box(pipeline.respond(black_box(&messages[0]), "en")))
    });

    group.finish();
}

criterion_group!(benches, bench_analysis, bench_training, bench_classification);
criterion_main!(benches);

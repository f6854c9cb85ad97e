//! Text analysis for intent classification.
//!
//! Raw user text flows through an [`Analyzer`](analyzer::Analyzer) before it
//! reaches the TF-IDF vectorizer:
//!
//! ```text
//! Raw Text → Tokenizer → Filter 1 → ... → Filter N → Tokens
//! ```
//!
//! The same analyzer instance is used when fitting the vocabulary and when
//! transforming incoming messages, so case normalisation is identical on both
//! sides.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

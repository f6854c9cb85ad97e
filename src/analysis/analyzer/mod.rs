//! Analyzers combine a tokenizer with a chain of token filters.

mod analyzer;
mod pipeline;
mod standard;

pub use analyzer::Analyzer;
pub use pipeline::PipelineAnalyzer;
pub use standard::StandardAnalyzer;

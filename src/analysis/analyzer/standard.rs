//! Standard analyzer used by the intent vectorizer.
//!
//! # Pipeline
//!
//! 1. RegexTokenizer with [`TERM_PATTERN`](crate::analysis::tokenizer::regex::TERM_PATTERN)
//! 2. LowercaseFilter
//!
//! No stop words are removed: short phrasings such as "what is your name"
//! would otherwise lose most of their signal.

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::LowercaseFilter;
use crate::analysis::tokenizer::RegexTokenizer;
use crate::error::Result;

/// A standard analyzer: term tokenizer plus lowercasing.
pub struct StandardAnalyzer {
    inner: PipelineAnalyzer,
}

impl StandardAnalyzer {
    /// Create a new standard analyzer with default settings.
    pub fn new() -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::terms()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()));

        Ok(StandardAnalyzer { inner: analyzer })
    }
}

impl Analyzer for StandardAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        self.inner.analyze(text)
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

impl std::fmt::Debug for StandardAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_analyzer() {
        let analyzer = StandardAnalyzer::new().unwrap();

        let terms = analyzer.terms("What are YOUR strengths? I am a hard worker").unwrap();

        assert_eq!(
            terms,
            vec!["what", "are", "your", "strengths", "am", "hard", "worker"]
        );
    }

    #[test]
    fn test_empty_input() {
        let analyzer = StandardAnalyzer::new().unwrap();
        assert!(analyzer.terms("").unwrap().is_empty());
        assert!(analyzer.terms("? ! a").unwrap().is_empty());
    }
}

//! TF-IDF vectorizer for text feature extraction.

use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

use ahash::AHashMap;
use rayon::prelude::*;

use crate::analysis::analyzer::Analyzer;
use crate::error::{LingobotError, Result};

/// TF-IDF vectorizer for text feature extraction.
///
/// Vectors have one dimension per vocabulary term, holding the raw term count
/// scaled by the smoothed inverse document frequency, and are L2 normalised.
/// Terms never seen while fitting are ignored.
pub struct TfIdfVectorizer {
    /// Vocabulary: term -> index mapping. Indices follow lexicographic term order.
    vocabulary: AHashMap<String, usize>,
    /// Inverse document frequency for each term.
    idf: Vec<f64>,
    /// Total number of documents seen during fitting.
    n_documents: usize,
    /// Analyzer for tokenization.
    analyzer: Arc<dyn Analyzer>,
}

impl std::fmt::Debug for TfIdfVectorizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TfIdfVectorizer")
            .field("vocabulary_size", &self.vocabulary.len())
            .field("n_documents", &self.n_documents)
            .field("analyzer", &self.analyzer.name())
            .finish()
    }
}

impl TfIdfVectorizer {
    /// Create a new, unfitted TF-IDF vectorizer with the specified analyzer.
    pub fn new(analyzer: Arc<dyn Analyzer>) -> Self {
        Self {
            vocabulary: AHashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
            analyzer,
        }
    }

    /// Fit the vectorizer on training documents.
    ///
    /// Fails if no document yields a single term.
    pub fn fit(&mut self, documents: &[String]) -> Result<()> {
        let analyzer = &self.analyzer;
        let analyzed: Vec<Vec<String>> = documents
            .par_iter()
            .map(|doc| analyzer.terms(doc))
            .collect::<Result<_>>()?;

        // Count document frequencies
        let mut document_frequency: BTreeMap<String, usize> = BTreeMap::new();
        for terms in analyzed {
            let unique_terms: HashSet<String> = terms.into_iter().collect();
            for term in unique_terms {
                *document_frequency.entry(term).or_insert(0) += 1;
            }
        }

        if document_frequency.is_empty() {
            return Err(LingobotError::training(
                "empty vocabulary; every training pattern analyzed to zero terms",
            ));
        }

        let n_documents = documents.len();
        let mut vocabulary = AHashMap::with_capacity(document_frequency.len());
        let mut idf = Vec::with_capacity(document_frequency.len());
        for (idx, (term, df)) in document_frequency.into_iter().enumerate() {
            // IDF = ln((N + 1) / (df + 1)) + 1
            idf.push(((n_documents as f64 + 1.0) / (df as f64 + 1.0)).ln() + 1.0);
            vocabulary.insert(term, idx);
        }

        self.vocabulary = vocabulary;
        self.idf = idf;
        self.n_documents = n_documents;

        Ok(())
    }

    /// Transform a document into a TF-IDF feature vector.
    pub fn transform(&self, document: &str) -> Result<Vec<f64>> {
        let terms = self.analyzer.terms(document)?;
        let mut features = vec![0.0; self.vocabulary.len()];

        // Count term frequencies
        for term in &terms {
            if let Some(&idx) = self.vocabulary.get(term) {
                features[idx] += 1.0;
            }
        }

        // Apply IDF
        for (idx, weight) in features.iter_mut().enumerate() {
            *weight *= self.idf[idx];
        }

        // L2 normalise
        let norm = features.iter().map(|w| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for weight in &mut features {
                *weight /= norm;
            }
        }

        Ok(features)
    }

    /// Transform many documents, in parallel.
    pub fn transform_batch(&self, documents: &[String]) -> Result<Vec<Vec<f64>>> {
        documents
            .par_iter()
            .map(|doc| self.transform(doc))
            .collect()
    }

    /// Get the size of the vocabulary.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    /// Feature index of a term, if it is in the vocabulary.
    pub fn term_index(&self, term: &str) -> Option<usize> {
        self.vocabulary.get(term).copied()
    }

    /// IDF weight of a term, if it is in the vocabulary.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.term_index(term).map(|idx| self.idf[idx])
    }

    /// Number of documents the vectorizer was fitted on.
    pub fn n_documents(&self) -> usize {
        self.n_documents
    }
}

//! Loading and validating an intent catalog.

use std::io;
use std::path::Path;

use ahash::AHashMap;
use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::types::IntentRecord;
use crate::error::{LingobotError, Result};
use crate::ml::intent_classifier::IntentSample;

/// An immutable, validated collection of intents.
#[derive(Debug, Clone)]
pub struct IntentCatalog {
    intents: Vec<IntentRecord>,
    /// tag -> position in `intents`
    index: AHashMap<String, usize>,
}

/// Summary counts reported by the CLI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub intents: usize,
    pub patterns: usize,
    pub responses: usize,
    pub with_examples: usize,
    pub with_resources: usize,
}

impl IntentCatalog {
    /// Load a catalog from a JSON file.
    ///
    /// A missing file and undecodable content are reported as different
    /// errors so the operator can tell them apart.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                return Err(LingobotError::CatalogNotFound(path.to_path_buf()));
            }
            Err(e) => return Err(e.into()),
        };

        let records: Vec<IntentRecord> =
            serde_json::from_str(&content).map_err(|source| LingobotError::CatalogMalformed {
                path: path.to_path_buf(),
                source,
            })?;

        let catalog = Self::from_records(records)?;
        info!(
            "Loaded {} intents from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Parse a catalog from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let records: Vec<IntentRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Build a catalog from records, enforcing the catalog invariants.
    pub fn from_records(intents: Vec<IntentRecord>) -> Result<Self> {
        if intents.is_empty() {
            return Err(LingobotError::invalid_catalog("catalog contains no intents"));
        }

        let mut index = AHashMap::with_capacity(intents.len());
        for (position, intent) in intents.iter().enumerate() {
            if intent.tag.trim().is_empty() {
                return Err(LingobotError::invalid_catalog(format!(
                    "intent #{position} has an empty tag"
                )));
            }
            if intent.patterns.is_empty() {
                return Err(LingobotError::invalid_catalog(format!(
                    "intent '{}' has no patterns",
                    intent.tag
                )));
            }
            if intent.responses.is_empty() {
                return Err(LingobotError::invalid_catalog(format!(
                    "intent '{}' has no responses",
                    intent.tag
                )));
            }
            if index.insert(intent.tag.clone(), position).is_some() {
                return Err(LingobotError::invalid_catalog(format!(
                    "duplicate tag '{}'",
                    intent.tag
                )));
            }
        }

        debug!("Catalog validated: {} unique tags", index.len());
        Ok(Self { intents, index })
    }

    /// Look up the record for a tag.
    pub fn get(&self, tag: &str) -> Option<&IntentRecord> {
        self.index.get(tag).map(|&position| &self.intents[position])
    }

    /// All intents in catalog order.
    pub fn intents(&self) -> &[IntentRecord] {
        &self.intents
    }

    /// Tags in catalog order.
    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.intents.iter().map(|intent| intent.tag.as_str())
    }

    pub fn len(&self) -> usize {
        self.intents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intents.is_empty()
    }

    /// One training sample per (pattern, tag) pair, in catalog order.
    pub fn training_samples(&self) -> Vec<IntentSample> {
        self.intents
            .iter()
            .flat_map(|intent| {
                intent.patterns.iter().map(|pattern| IntentSample {
                    query: pattern.clone(),
                    intent: intent.tag.clone(),
                })
            })
            .collect()
    }

    pub fn stats(&self) -> CatalogStats {
        CatalogStats {
            intents: self.intents.len(),
            patterns: self.intents.iter().map(|i| i.patterns.len()).sum(),
            responses: self.intents.iter().map(|i| i.responses.len()).sum(),
            with_examples: self
                .intents
                .iter()
                .filter(|i| !i.examples().is_empty())
                .count(),
            with_resources: self
                .intents
                .iter()
                .filter(|i| !i.resources().is_empty())
                .count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const CATALOG: &str = r#"[
        {"tag": "greeting", "patterns": ["hello", "hi"], "responses": ["Hi there!"]},
        {
            "tag": "strengths",
            "patterns": ["what are your strengths", "strong points"],
            "responses": ["Talk about skills that match the role."],
            "additional_info": {
                "examples": [{"question": "What is your greatest strength?", "suggestion": "Pick one"}]
            }
        }
    ]"#;

    #[test]
    fn test_from_json_str() {
        let catalog = IntentCatalog::from_json_str(CATALOG).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.tags().collect::<Vec<_>>(), vec!["greeting", "strengths"]);
        assert_eq!(catalog.get("greeting").unwrap().responses[0], "Hi there!");
        assert!(catalog.get("farewell").is_none());
    }

    #[test]
    fn test_training_samples_one_per_pattern() {
        let catalog = IntentCatalog::from_json_str(CATALOG).unwrap();
        let samples = catalog.training_samples();

        assert_eq!(samples.len(), 4);
        assert_eq!(samples[0].query, "hello");
        assert_eq!(samples[0].intent, "greeting");
        assert_eq!(samples[3].intent, "strengths");
    }

    #[test]
    fn test_duplicate_tags_rejected() {
        let json = r#"[
            {"tag": "greeting", "patterns": ["hello"], "responses": ["Hi"]},
            {"tag": "greeting", "patterns": ["hey"], "responses": ["Hey"]}
        ]"#;

        let err = IntentCatalog::from_json_str(json).unwrap_err();
        assert!(matches!(err, LingobotError::InvalidCatalog(_)));
        assert!(err.to_string().contains("duplicate tag 'greeting'"));
    }

    #[test]
    fn test_empty_lists_rejected() {
        let no_patterns = r#"[{"tag": "a", "patterns": [], "responses": ["x"]}]"#;
        assert!(IntentCatalog::from_json_str(no_patterns).is_err());

        let no_responses = r#"[{"tag": "a", "patterns": ["x"], "responses": []}]"#;
        assert!(IntentCatalog::from_json_str(no_responses).is_err());

        assert!(IntentCatalog::from_json_str("[]").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = IntentCatalog::load(dir.path().join("intents.json")).unwrap_err();

        assert!(matches!(err, LingobotError::CatalogNotFound(_)));
    }

    #[test]
    fn test_load_malformed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"[{\"tag\": \"greeting\",").unwrap();

        let err = IntentCatalog::load(file.path()).unwrap_err();
        assert!(matches!(err, LingobotError::CatalogMalformed { .. }));
    }

    #[test]
    fn test_load_valid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CATALOG.as_bytes()).unwrap();

        let catalog = IntentCatalog::load(file.path()).unwrap();
        let stats = catalog.stats();

        assert_eq!(stats.intents, 2);
        assert_eq!(stats.patterns, 4);
        assert_eq!(stats.responses, 2);
        assert_eq!(stats.with_examples, 1);
        assert_eq!(stats.with_resources, 0);
    }
}

//! Catalog record types.

use serde::{Deserialize, Serialize};

/// One intent: a tag, the phrasings used to train the classifier, and the
/// candidate replies.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntentRecord {
    /// Unique identifier of the intent.
    pub tag: String,
    /// Example phrasings, used only for training.
    pub patterns: Vec<String>,
    /// Reply templates; one is chosen at random per turn.
    pub responses: Vec<String>,
    /// Structured content appended after the chosen reply.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<AdditionalInfo>,
}

/// Optional extra content attached to an intent. Both parts are independent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdditionalInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub examples: Option<Vec<ExampleEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<ResourceEntry>>,
}

/// A sample interview question with a model answer or a hint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExampleEntry {
    pub question: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_answer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggestion: Option<String>,
}

impl ExampleEntry {
    /// The text shown after "A:": the sample answer, else the suggestion,
    /// else nothing.
    pub fn answer(&self) -> &str {
        self.sample_answer
            .as_deref()
            .or(self.suggestion.as_deref())
            .unwrap_or("")
    }
}

/// A link to further reading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceEntry {
    pub topic: String,
    pub url: String,
}

impl IntentRecord {
    /// Examples to render, if any are present.
    pub fn examples(&self) -> &[ExampleEntry] {
        self.additional_info
            .as_ref()
            .and_then(|info| info.examples.as_deref())
            .unwrap_or(&[])
    }

    /// Resources to render, if any are present.
    pub fn resources(&self) -> &[ResourceEntry] {
        self.additional_info
            .as_ref()
            .and_then(|info| info.resources.as_deref())
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_precedence() {
        let both = ExampleEntry {
            question: "q".to_string(),
            sample_answer: Some("sample".to_string()),
            suggestion: Some("hint".to_string()),
        };
        assert_eq!(both.answer(), "sample");

        let hint_only = ExampleEntry {
            question: "q".to_string(),
            sample_answer: None,
            suggestion: Some("hint".to_string()),
        };
        assert_eq!(hint_only.answer(), "hint");

        let neither = ExampleEntry {
            question: "q".to_string(),
            sample_answer: None,
            suggestion: None,
        };
        assert_eq!(neither.answer(), "");
    }

    #[test]
    fn test_deserialize_without_additional_info() {
        let record: IntentRecord = serde_json::from_str(
            r#"{"tag": "greeting", "patterns": ["hello"], "responses": ["Hi there!"]}"#,
        )
        .unwrap();

        assert_eq!(record.tag, "greeting");
        assert!(record.additional_info.is_none());
        assert!(record.examples().is_empty());
        assert!(record.resources().is_empty());
    }

    #[test]
    fn test_deserialize_partial_additional_info() {
        let record: IntentRecord = serde_json::from_str(
            r#"{
                "tag": "resume",
                "patterns": ["resume tips"],
                "responses": ["Keep it short."],
                "additional_info": {
                    "resources": [{"topic": "Guide", "url": "https://example.com"}]
                }
            }"#,
        )
        .unwrap();

        assert!(record.examples().is_empty());
        assert_eq!(record.resources().len(), 1);
        assert_eq!(record.resources()[0].topic, "Guide");
    }

    #[test]
    fn test_example_requires_question() {
        let result = serde_json::from_str::<ExampleEntry>(r#"{"sample_answer": "x"}"#);
        assert!(result.is_err());
    }
}

//! Translator trait definition.

use crate::error::{LingobotError, Result};

use super::language::Language;

/// A translation backend.
///
/// Calls are blocking, single-attempt and may fail; the conversation pipeline
/// treats any error as terminal for the current turn.
pub trait Translator: Send + Sync {
    /// Translate `text` from `source` to `dest` (short language codes).
    fn translate(&self, text: &str, source: &str, dest: &str) -> Result<String>;

    /// Get the name of this translator for debugging and logging.
    fn name(&self) -> &'static str;
}

/// Reject empty text and unsupported language codes.
pub fn validate_request(text: &str, source: &str, dest: &str) -> Result<(Language, Language)> {
    if text.trim().is_empty() {
        return Err(LingobotError::translation("nothing to translate: empty input"));
    }
    Ok((Language::from_code(source)?, Language::from_code(dest)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_request() {
        let (source, dest) = validate_request("hola", "es", "en").unwrap();
        assert_eq!(source, Language::Spanish);
        assert_eq!(dest, Language::English);
    }

    #[test]
    fn test_empty_text_rejected() {
        assert!(validate_request("", "en", "es").is_err());
        assert!(validate_request("   \n", "en", "es").is_err());
    }

    #[test]
    fn test_unknown_codes_rejected() {
        assert!(validate_request("hello", "klingon", "en").is_err());
        assert!(validate_request("hello", "en", "").is_err());
    }
}

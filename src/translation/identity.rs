//! Offline translator that returns its input unchanged.

use crate::error::Result;

use super::translator::{Translator, validate_request};

/// Passes text through untouched, still enforcing the request contract.
///
/// Useful offline and for English-only deployments.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityTranslator;

impl IdentityTranslator {
    pub fn new() -> Self {
        IdentityTranslator
    }
}

impl Translator for IdentityTranslator {
    fn translate(&self, text: &str, source: &str, dest: &str) -> Result<String> {
        validate_request(text, source, dest)?;
        Ok(text.to_string())
    }

    fn name(&self) -> &'static str {
        "identity"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        let translator = IdentityTranslator::new();
        assert_eq!(translator.translate("hola", "es", "en").unwrap(), "hola");
    }

    #[test]
    fn test_identity_enforces_contract() {
        let translator = IdentityTranslator::new();
        assert!(translator.translate("", "en", "en").is_err());
        assert!(translator.translate("hello", "en", "xx").is_err());
    }
}

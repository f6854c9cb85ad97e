//! Supported user languages.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LingobotError, Result};

/// Languages the chat shell offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    English,
    Spanish,
    French,
    Hindi,
    German,
    ChineseSimplified,
}

/// All messages are classified in this language.
pub const PIVOT_LANGUAGE: Language = Language::English;

impl Language {
    /// Every supported language, in menu order.
    pub const ALL: [Language; 6] = [
        Language::English,
        Language::Spanish,
        Language::French,
        Language::Hindi,
        Language::German,
        Language::ChineseSimplified,
    ];

    /// Short language code as used by the translation service.
    pub fn code(self) -> &'static str {
        match self {
            Language::English => "en",
            Language::Spanish => "es",
            Language::French => "fr",
            Language::Hindi => "hi",
            Language::German => "de",
            Language::ChineseSimplified => "zh-cn",
        }
    }

    /// Human-readable name for menus.
    pub fn display_name(self) -> &'static str {
        match self {
            Language::English => "English",
            Language::Spanish => "Spanish",
            Language::French => "French",
            Language::Hindi => "Hindi",
            Language::German => "German",
            Language::ChineseSimplified => "Chinese (Simplified)",
        }
    }

    /// Parse a language code, ignoring case and surrounding whitespace.
    pub fn from_code(code: &str) -> Result<Self> {
        let normalized = code.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|language| language.code() == normalized)
            .ok_or_else(|| {
                LingobotError::translation(format!("invalid source/destination language: {code:?}"))
            })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name(), self.code())
    }
}

impl FromStr for Language {
    type Err = LingobotError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_code(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_code(language.code()).unwrap(), language);
        }
    }

    #[test]
    fn test_case_insensitive() {
        assert_eq!(
            Language::from_code("zh-CN").unwrap(),
            Language::ChineseSimplified
        );
        assert_eq!(" ES ".parse::<Language>().unwrap(), Language::Spanish);
    }

    #[test]
    fn test_unsupported_code() {
        let err = Language::from_code("xx").unwrap_err();
        assert!(err.is_per_turn());
    }

    #[test]
    fn test_pivot_is_english() {
        assert_eq!(PIVOT_LANGUAGE.code(), "en");
        assert_eq!(PIVOT_LANGUAGE.to_string(), "English (en)");
    }
}

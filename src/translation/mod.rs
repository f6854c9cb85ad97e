//! Translation gateway.
//!
//! Every turn passes through a [`Translator`] twice: user language to the
//! pivot language before classification, and back afterwards. The gateway is
//! an external dependency; implementations here are a thin HTTP client and an
//! offline identity translator.

mod google;
mod identity;
mod language;
mod translator;

pub use google::{GoogleTranslator, GoogleTranslatorConfig};
pub use identity::IdentityTranslator;
pub use language::{Language, PIVOT_LANGUAGE};
pub use translator::{Translator, validate_request};

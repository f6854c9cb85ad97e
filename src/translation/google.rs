//! HTTP client for the public Google Translate web endpoint.

use std::time::Duration;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::{LingobotError, Result};

use super::translator::{Translator, validate_request};

/// Connection settings for [`GoogleTranslator`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoogleTranslatorConfig {
    /// Scheme and host of the service; the path is appended.
    pub base_url: String,
    /// Whole-request timeout. The call is attempted once.
    pub timeout_secs: u64,
}

impl Default for GoogleTranslatorConfig {
    fn default() -> Self {
        Self {
            base_url: "https://translate.googleapis.com".to_string(),
            timeout_secs: 10,
        }
    }
}

/// Translator backed by the `translate_a/single` endpoint.
pub struct GoogleTranslator {
    agent: ureq::Agent,
    endpoint: String,
}

impl std::fmt::Debug for GoogleTranslator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GoogleTranslator")
            .field("endpoint", &self.endpoint)
            .finish()
    }
}

impl GoogleTranslator {
    pub fn new(config: &GoogleTranslatorConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build();
        let endpoint = format!(
            "{}/translate_a/single",
            config.base_url.trim_end_matches('/')
        );

        Self { agent, endpoint }
    }

    /// Join the translated segments of a reply shaped like
    /// `[[["Hola ", "Hello ", ...], ["mundo", "world", ...]], ...]`.
    fn parse_reply(body: &serde_json::Value) -> Result<String> {
        let segments = body
            .get(0)
            .and_then(|s| s.as_array())
            .ok_or_else(|| LingobotError::translation("malformed response: no segments"))?;

        let mut translated = String::new();
        for segment in segments {
            let piece = segment
                .get(0)
                .and_then(|p| p.as_str())
                .ok_or_else(|| LingobotError::translation("malformed response: bad segment"))?;
            translated.push_str(piece);
        }

        if translated.is_empty() {
            return Err(LingobotError::translation("malformed response: empty translation"));
        }
        Ok(translated)
    }
}

impl Translator for GoogleTranslator {
    fn translate(&self, text: &str, source: &str, dest: &str) -> Result<String> {
        let (source, dest) = validate_request(text, source, dest)?;
        if source == dest {
            return Ok(text.to_string());
        }

        debug!(
            "Translating {} chars {} -> {}",
            text.len(),
            source.code(),
            dest.code()
        );

        let response = self
            .agent
            .get(&self.endpoint)
            .query("client", "gtx")
            .query("sl", source.code())
            .query("tl", dest.code())
            .query("dt", "t")
            .query("q", text)
            .call()
            .map_err(|e| match e {
                ureq::Error::Status(code, _) => {
                    LingobotError::translation(format!("service returned status {code}"))
                }
                ureq::Error::Transport(transport) => {
                    LingobotError::translation(format!("request failed: {transport}"))
                }
            })?;

        let body: serde_json::Value = response
            .into_json()
            .map_err(|e| LingobotError::translation(format!("malformed response: {e}")))?;

        Self::parse_reply(&body)
    }

    fn name(&self) -> &'static str {
        "google"
    }
}

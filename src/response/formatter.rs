//! Response formatter: random template choice plus auxiliary blocks.
//!
//! Output layout:
//!
//! ```text
//! <one of the intent's responses>
//!
//! Examples:
//! Q: <question> - A: <answer>
//!
//! Resources:
//! <topic>: <url>
//! ```
//!
//! Each block appears only when the intent has at least one entry for it.

use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

use crate::catalog::IntentRecord;

enum Selector {
    Thread,
    Seeded(Mutex<StdRng>),
}

/// Formats catalog records into reply text.
pub struct ResponseFormatter {
    selector: Selector,
}

impl std::fmt::Debug for ResponseFormatter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let selector = match self.selector {
            Selector::Thread => "thread",
            Selector::Seeded(_) => "seeded",
        };
        f.debug_struct("ResponseFormatter")
            .field("selector", &selector)
            .finish()
    }
}

impl Default for ResponseFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ResponseFormatter {
    /// A formatter drawing from the thread-local RNG.
    pub fn new() -> Self {
        Self {
            selector: Selector::Thread,
        }
    }

    /// A formatter whose choices are reproducible for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            selector: Selector::Seeded(Mutex::new(StdRng::seed_from_u64(seed))),
        }
    }

    /// Build either kind from an optional seed.
    pub fn from_seed(seed: Option<u64>) -> Self {
        seed.map(Self::seeded).unwrap_or_default()
    }

    /// Format a reply for an intent.
    pub fn format(&self, intent: &IntentRecord) -> String {
        match &self.selector {
            Selector::Thread => self.format_with(intent, &mut rand::rng()),
            Selector::Seeded(rng) => self.format_with(intent, &mut *rng.lock()),
        }
    }

    /// Format a reply using the given random source.
    pub fn format_with<R: Rng + ?Sized>(&self, intent: &IntentRecord, rng: &mut R) -> String {
        // Catalog validation guarantees at least one response.
        let mut response = intent
            .responses
            .choose(rng)
            .cloned()
            .unwrap_or_default();

        let examples = intent.examples();
        if !examples.is_empty() {
            let lines: Vec<String> = examples
                .iter()
                .map(|ex| format!("Q: {} - A: {}", ex.question, ex.answer()))
                .collect();
            response.push_str("\n\nExamples:\n");
            response.push_str(&lines.join("\n"));
        }

        let resources = intent.resources();
        if !resources.is_empty() {
            let lines: Vec<String> = resources
                .iter()
                .map(|res| format!("{}: {}", res.topic, res.url))
                .collect();
            response.push_str("\n\nResources:\n");
            response.push_str(&lines.join("\n"));
        }

        response
    }
}

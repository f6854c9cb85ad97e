//! The intent catalog: the bot's static knowledge.
//!
//! A catalog is a JSON array of [`IntentRecord`]s loaded once at startup and
//! immutable afterwards. Every invariant the rest of the crate relies on
//! (unique tags, non-empty patterns and responses) is checked here, so later
//! stages never have to check for missing fields.

mod loader;
mod types;

pub use loader::{CatalogStats, IntentCatalog};
pub use types::{AdditionalInfo, ExampleEntry, IntentRecord, ResourceEntry};

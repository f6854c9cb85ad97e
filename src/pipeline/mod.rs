//! The per-turn conversation pipeline.
//!
//! A turn moves through translation to the pivot language, classification,
//! catalog lookup, formatting and translation back to the user's language.
//! Any per-turn failure ends the turn with a fallback reply instead of an
//! error.

mod conversation;
mod stage;

pub use conversation::{ConversationPipeline, Resolution};
pub use stage::PipelineStage;

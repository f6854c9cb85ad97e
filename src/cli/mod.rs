//! Command Line Interface for the Lingobot chatbot.

pub mod args;
pub mod commands;
pub mod output;
pub mod shell;

// Re-export commonly used types
pub use args::*;
pub use commands::*;
pub use output::*;
pub use shell::{ChatShell, ShellAction};

//! Turning a resolved intent into reply text.

mod formatter;

pub use formatter::ResponseFormatter;

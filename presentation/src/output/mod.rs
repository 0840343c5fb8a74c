//! Output formatting for triage outcomes

pub mod console;
pub mod formatter;
pub mod json;

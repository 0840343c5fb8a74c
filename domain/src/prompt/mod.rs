//! Prompt domain
//!
//! Templates for the classification and advisory prompts.

mod template;

pub use template::{CONSULT_DISCLAIMER, PromptTemplate};

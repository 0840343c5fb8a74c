//! Interactive chat module
//!
//! Provides a readline-based interactive triage interface.

mod repl;

pub use repl::{LineAction, ReplCommand, TriageRepl};

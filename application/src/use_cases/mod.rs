//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod classify_severity;
pub mod generate_advisory;
pub mod init_session;
pub mod run_triage;

#[cfg(test)]
pub(crate) mod test_support;

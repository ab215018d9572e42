//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod generate_content;
pub mod study_session;

#[cfg(test)]
pub(crate) mod testing;

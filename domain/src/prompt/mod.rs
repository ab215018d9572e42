//! Prompt domain
//!
//! Instruction templates for the three content requests.

mod template;

pub use template::PromptTemplate;

//! Response parsing
//!
//! Turns raw model text into typed learning content.

pub mod parser;

pub use parser::{
    FORMAT_ERROR_MESSAGE, ParseError, parse_quiz, parse_summary, parse_vocabulary,
    strip_code_fence,
};

//! Rendering of generated study material

pub mod console;
pub mod formatter;

//! Terminal quiz player

pub mod interactive;

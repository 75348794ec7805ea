//! CLI command implementations
//!
//! Each command has its own module with a `run` function.

pub mod dump;

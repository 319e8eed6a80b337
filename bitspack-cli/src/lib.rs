//! Library entry for bitspack-cli used by integration tests and embedding.

pub mod commands;

// Re-export commands for convenience
pub use commands::*;

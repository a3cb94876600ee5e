//! Shared value types for the rep tracker crates.

pub mod types;

pub use types::{InvalidUsername, LogId, Username};

//! Error handling module
//!
//! Defines the error types surfaced to the user

pub mod types;

pub use types::*;

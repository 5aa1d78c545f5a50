//! Error handling
//!
//! Defines error types and presentation mapping for the credential guard.

pub mod handlers;
pub mod types;

pub use types::*;

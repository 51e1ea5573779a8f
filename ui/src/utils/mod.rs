//! Utility Functions and Cross-Cutting Concerns
//!
//! - **console_macros**: WASM-compatible logging macros for browser console output
//! - **validation**: live input feedback and its styling

pub mod console_macros;
pub mod validation;

pub use validation::*;

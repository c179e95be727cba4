//! # lc-core
//!
//! Core definitions shared across the leavecal workspace: the error type
//! and its macros, the process-wide `Settings`, and the boundary parsers.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` macro.
pub mod errors;

/// Global library settings (evaluation date).
pub mod settings;

/// Miscellaneous utilities.
pub mod utilities;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedEvaluationDate, Settings};

//! Error types shared across the resurface crates.
//!
//! Note that the three per-document outcomes (`Due`, `NoDueDateFound`,
//! `DateblockNotFound`) are ordinary [`Verdict`](crate::verdict::Verdict)
//! values, not errors: every readable document yields exactly one of them.

use thiserror::Error;

/// Errors surfaced by resurface operations.
#[derive(Debug, Error)]
pub enum ResurfaceError {
    /// A date string could not be parsed.
    #[error("invalid date '{input}': use 'today', 'yesterday', or YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input string.
        input: String,
    },

    /// An I/O failure while reading a document.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience alias for results using [`ResurfaceError`].
pub type Result<T> = std::result::Result<T, ResurfaceError>;

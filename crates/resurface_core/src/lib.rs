//! # `resurface_core`
//!
//! This is the `resurface_core` library!
//! It contains the scanning and evaluation logic behind the `resurface` CLI.
//!
//! An "RSF dateblock" is a Markdown list of `todo.txt`-formatted ISO dates
//! directly under a case-insensitive `rsf:` header line. It describes the
//! resurfacing schedule of the note that carries it:
//!
//! ```text
//! rsf:
//! - x 2022-03-10
//! - 2022-03-15
//! ```
//!
//! A date marked with a leading `x` has already been handled. The library
//! finds the first dateblock of a document and reports the first unhandled
//! date that falls inside a caller-supplied window around a reference date.
//! Marking dates complete is the user's job; nothing here mutates files.

#![warn(missing_docs)]

/// Reference-date parsing
pub mod date;

/// Dateblock location
pub mod dateblock;

/// Due-date evaluation
pub mod duedate;

/// Error types
pub mod error;

/// Per-document verdicts
pub mod verdict;

//! Per-document verdicts and the evaluation pipeline.

use chrono::NaiveDate;

use crate::dateblock::find_dateblock;
use crate::duedate::{DueWindow, first_due, parse_dateblock};

/// The outcome of evaluating one document.
///
/// Every readable document yields exactly one verdict; none of the variants
/// is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// The first pending date of the dateblock that falls inside the window.
    Due(NaiveDate),
    /// A dateblock exists, but no pending date is inside the window.
    NoDueDateFound,
    /// The document carries no RSF header at all.
    DateblockNotFound,
}

/// Evaluate a document's lines against a due window.
///
/// Locates the first dateblock, maps its lines to entries (malformed lines
/// are dropped), and picks the first pending in-window date. A document
/// whose header has no entries evaluates to [`Verdict::NoDueDateFound`],
/// not [`Verdict::DateblockNotFound`].
pub fn evaluate_lines<I, S>(lines: I, window: &DueWindow) -> Verdict
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let Some(block) = find_dateblock(lines) else {
        return Verdict::DateblockNotFound;
    };

    let entries = parse_dateblock(&block);
    match first_due(&entries, window) {
        Some(date) => Verdict::Due(date),
        None => Verdict::NoDueDateFound,
    }
}

//! RSF dateblock location.
//!
//! A dateblock starts at a header line reading `rsf:` (any casing, with
//! surrounding whitespace tolerated) and consists of the list-item lines
//! immediately below it. Collection is strict on purpose: a blank line, an
//! indented line, or anything that is not a well-shaped list item ends the
//! block, and documented behavior depends on those exact breakage points.
//! Only the first header of a document is ever considered.

/// Returns true if `line` is an RSF header.
///
/// The line must equal the token `rsf:` after trimming surrounding
/// whitespace; the comparison is ASCII case-insensitive. A header with
/// trailing prose (`rsf: read weekly`) does not count.
pub fn is_rsf_header(line: &str) -> bool {
    line.trim().eq_ignore_ascii_case("rsf:")
}

/// A shape-parsed list-item line: completion marker plus the date substring.
///
/// "Shape-parsed" means the date looks like `YYYY-MM-DD`; whether it names a
/// real calendar day is checked later, when entries are built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListItem<'a> {
    /// True when the item carries a leading `x`/`X` completion marker.
    pub completed: bool,
    /// The ten-character date substring, e.g. `2022-03-15`.
    pub date: &'a str,
}

/// Shape-parse one list-item line.
///
/// A valid item starts at column zero with `-` or `*`, then optional
/// whitespace, then an optional single `x`/`X` completion marker with
/// optional surrounding whitespace, then a `YYYY-MM-DD`-shaped date.
/// Trailing content after the date is ignored. Returns `None` for anything
/// else, including indented lines and blank lines.
pub fn parse_list_item(line: &str) -> Option<ListItem<'_>> {
    let rest = line
        .strip_prefix('-')
        .or_else(|| line.strip_prefix('*'))?;
    let rest = rest.trim_start();

    let (completed, rest) = match rest.strip_prefix(['x', 'X']) {
        Some(after) => (true, after.trim_start()),
        None => (false, rest),
    };

    let date = rest.get(..10)?;
    if !is_iso_date_shape(date) {
        return None;
    }

    Some(ListItem { completed, date })
}

/// Check for the `\d{4}-\d{2}-\d{2}` shape without validating the calendar.
fn is_iso_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Find the first RSF dateblock in a stream of lines.
///
/// Returns the raw list-item lines that directly follow the first header, or
/// `None` when no header line exists in the input. A header followed by
/// nothing collectable still yields `Some` with an empty vector; "header
/// present but empty" and "no header" are distinct outcomes.
///
/// The caller applies any line cap before handing over the iterator, so
/// lines past the cap are never read.
pub fn find_dateblock<I, S>(lines: I) -> Option<Vec<String>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut lines = lines.into_iter();

    // Drop everything up to and including the header line.
    lines.find(|line| is_rsf_header(line.as_ref()))?;

    // Take consecutive list items; the first non-item line ends the block.
    let mut items = Vec::new();
    for line in lines {
        let line = line.as_ref();
        if parse_list_item(line).is_none() {
            break;
        }
        items.push(line.to_string());
    }

    log::debug!("dateblock located with {} item(s)", items.len());
    Some(items)
}

//! Due-date entries and window evaluation.

use chrono::{Duration, NaiveDate};

use crate::dateblock::parse_list_item;

/// One entry of a dateblock: a calendar date plus its completion flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueDate {
    /// The scheduled date.
    pub date: NaiveDate,
    /// True when the entry is marked handled (`x`/`X`).
    pub completed: bool,
}

impl DueDate {
    /// Parse a raw list-item line into an entry.
    ///
    /// Returns `None` when the line is not a well-shaped list item or when
    /// the date shape does not name a real calendar day (`2022-13-45`).
    /// Callers drop such lines silently; a malformed entry is never fatal.
    pub fn parse(line: &str) -> Option<DueDate> {
        let item = parse_list_item(line)?;
        match NaiveDate::parse_from_str(item.date, "%Y-%m-%d") {
            Ok(date) => Some(DueDate {
                date,
                completed: item.completed,
            }),
            Err(_) => {
                log::debug!("dropping list line with invalid calendar date: {line:?}");
                None
            }
        }
    }
}

/// Map raw dateblock lines to entries, dropping malformed lines.
///
/// Source order and completion flags are preserved exactly.
pub fn parse_dateblock(lines: &[String]) -> Vec<DueDate> {
    lines.iter().filter_map(|line| DueDate::parse(line)).collect()
}

/// The inclusive date range within which pending dates count as due.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DueWindow {
    earliest: NaiveDate,
    latest: NaiveDate,
}

impl DueWindow {
    /// Build the window `[reference - overdue_days, reference + advance_days]`.
    ///
    /// Both spans are unsigned, so the window can never invert.
    pub fn new(reference: NaiveDate, overdue_days: u32, advance_days: u32) -> DueWindow {
        DueWindow {
            earliest: reference - Duration::days(i64::from(overdue_days)),
            latest: reference + Duration::days(i64::from(advance_days)),
        }
    }

    /// Returns true when `date` lies inside the window, bounds included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.earliest <= date && date <= self.latest
    }

    /// The earliest date still inside the window.
    pub fn earliest(&self) -> NaiveDate {
        self.earliest
    }

    /// The latest date still inside the window.
    pub fn latest(&self) -> NaiveDate {
        self.latest
    }
}

/// Return the first pending entry whose date falls inside the window.
///
/// Entries are checked in source order: when several dates qualify, the one
/// that appears first in the dateblock wins, regardless of which is earlier
/// on the calendar. Completed entries are skipped.
pub fn first_due(entries: &[DueDate], window: &DueWindow) -> Option<NaiveDate> {
    entries
        .iter()
        .find(|entry| !entry.completed && window.contains(entry.date))
        .map(|entry| entry.date)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // ── DueDate::parse ───────────────────────────────────────────────────

    #[test]
    fn parse_completed() {
        let entry = DueDate::parse("- x 2022-07-18").unwrap();
        assert!(entry.completed);
        assert_eq!(entry.date, date(2022, 7, 18));
    }

    #[test]
    fn parse_notcompleted() {
        let entry = DueDate::parse("- 2022-07-18").unwrap();
        assert!(!entry.completed);
        assert_eq!(entry.date, date(2022, 7, 18));
    }

    #[test]
    fn parse_drops_invalid_calendar_date() {
        assert!(DueDate::parse("- 2022-13-45").is_none());
        assert!(DueDate::parse("- 2022-02-30").is_none());
    }

    #[test]
    fn parse_dateblock_preserves_order_and_flags() {
        let lines = vec![
            "- x 2022-03-10".to_string(),
            "- 2022-13-45".to_string(),
            "- 2022-03-15".to_string(),
        ];
        let entries = parse_dateblock(&lines);
        assert_eq!(
            entries,
            vec![
                DueDate {
                    date: date(2022, 3, 10),
                    completed: true
                },
                DueDate {
                    date: date(2022, 3, 15),
                    completed: false
                },
            ]
        );
    }

    #[test]
    fn parse_dateblock_accepts_odd_spacing_as_completed() {
        let lines = vec!["-x2022-07-10".to_string(), "- x   2022-07-18   ".to_string()];
        let entries = parse_dateblock(&lines);
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.completed));
    }

    // ── DueWindow ────────────────────────────────────────────────────────

    #[test]
    fn window_bounds_are_inclusive() {
        let window = DueWindow::new(date(2022, 3, 13), 3, 2);
        assert_eq!(window.earliest(), date(2022, 3, 10));
        assert_eq!(window.latest(), date(2022, 3, 15));
        assert!(window.contains(date(2022, 3, 10)));
        assert!(window.contains(date(2022, 3, 12)));
        assert!(window.contains(date(2022, 3, 15)));
        assert!(!window.contains(date(2022, 3, 9)));
        assert!(!window.contains(date(2022, 3, 16)));
    }

    #[test]
    fn window_with_zero_spans_is_single_day() {
        let window = DueWindow::new(date(2022, 7, 20), 0, 0);
        assert!(window.contains(date(2022, 7, 20)));
        assert!(!window.contains(date(2022, 7, 19)));
        assert!(!window.contains(date(2022, 7, 21)));
    }

    // ── first_due ────────────────────────────────────────────────────────

    #[test]
    fn completed_entry_is_skipped() {
        // `2022-07-18` is completed; `2022-07-30` is outside the window.
        let entries = vec![
            DueDate {
                date: date(2022, 7, 18),
                completed: true,
            },
            DueDate {
                date: date(2022, 7, 30),
                completed: false,
            },
        ];
        let window = DueWindow::new(date(2022, 7, 20), 3, 0);
        assert_eq!(first_due(&entries, &window), None);
    }

    #[test]
    fn pending_date_in_window_is_due() {
        let entries = vec![
            DueDate {
                date: date(2022, 7, 18),
                completed: false,
            },
            DueDate {
                date: date(2022, 7, 30),
                completed: false,
            },
        ];
        let window = DueWindow::new(date(2022, 7, 18), 3, 0);
        assert_eq!(first_due(&entries, &window), Some(date(2022, 7, 18)));
    }

    #[test]
    fn first_encountered_wins_over_earlier_date() {
        // Both qualify; the entry listed first is reported even though the
        // second is earlier on the calendar.
        let entries = vec![
            DueDate {
                date: date(2022, 7, 19),
                completed: false,
            },
            DueDate {
                date: date(2022, 7, 17),
                completed: false,
            },
        ];
        let window = DueWindow::new(date(2022, 7, 20), 3, 0);
        assert_eq!(first_due(&entries, &window), Some(date(2022, 7, 19)));
    }

    #[test]
    fn empty_dateblock_has_no_due_date() {
        let window = DueWindow::new(date(2022, 7, 20), 3, 0);
        assert_eq!(first_due(&[], &window), None);
    }

    #[test]
    fn evaluation_is_idempotent() {
        let entries = vec![DueDate {
            date: date(2022, 7, 19),
            completed: false,
        }];
        let window = DueWindow::new(date(2022, 7, 20), 3, 0);
        let first = first_due(&entries, &window);
        let second = first_due(&entries, &window);
        assert_eq!(first, second);
        assert_eq!(first, Some(date(2022, 7, 19)));
    }
}

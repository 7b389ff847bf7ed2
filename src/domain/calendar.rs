//! Month grid arithmetic for the calendar view

use crate::domain::Entry;
use chrono::{Datelike, Duration, NaiveDate};

/// Marker carried by a day cell that has at least one entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellEntry {
    pub id: u64,
    pub has_image: bool,
}

/// One day of the displayed month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub day: u32,
    pub date: NaiveDate,
    /// First (newest) entry dated on this day, if any. Further entries on the
    /// same date are reachable only through the list under the grid, never
    /// through the grid itself.
    pub entry: Option<CellEntry>,
}

/// A month laid out for rendering: weeks start on Sunday, so the first week
/// is padded with `leading_blanks` empty cells.
#[derive(Debug, Clone)]
pub struct MonthGrid {
    pub year: i32,
    pub month: u32,
    pub leading_blanks: usize,
    pub days: Vec<DayCell>,
}

impl MonthGrid {
    /// Build the grid for the month containing `first_of_month`.
    ///
    /// `entries` is expected newest-first (the repository's order); each day
    /// cell picks the first match, so a day with several entries shows its
    /// newest one.
    pub fn new(first_of_month: NaiveDate, entries: &[Entry]) -> Self {
        let year = first_of_month.year();
        let month = first_of_month.month();
        let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid year-month");

        let leading_blanks = first.weekday().num_days_from_sunday() as usize;

        let days = (1..=days_in_month(year, month))
            .map(|day| {
                let date = NaiveDate::from_ymd_opt(year, month, day).expect("day in month");
                let entry = entries.iter().find(|e| e.date == date).map(|e| CellEntry {
                    id: e.id,
                    has_image: e.has_image(),
                });
                DayCell { day, date, entry }
            })
            .collect();

        MonthGrid {
            year,
            month,
            leading_blanks,
            days,
        }
    }

    /// Month title, e.g. "January 2025"
    pub fn title(&self) -> String {
        let first = NaiveDate::from_ymd_opt(self.year, self.month, 1).expect("valid year-month");
        first.format("%B %Y").to_string()
    }
}

/// Number of days in the given month
pub fn days_in_month(year: i32, month: u32) -> u32 {
    let first = NaiveDate::from_ymd_opt(year, month, 1).expect("valid year-month");
    let next_month = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .expect("valid next month");
    (next_month - first).num_days() as u32
}

/// Parse a YYYY-MM month reference to its first day
pub fn parse_month(s: &str) -> Option<NaiveDate> {
    let date_str = format!("{}-01", s);
    NaiveDate::parse_from_str(&date_str, "%Y-%m-%d").ok()
}

/// First day of the month containing `date`
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.day0() as i64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Mood;

    fn entry(id: u64, date: &str, image: Option<&str>) -> Entry {
        Entry {
            id,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            image: image.map(|s| s.to_string()),
            text: "x".to_string(),
            mood: Mood::default(),
            location: "Unknown".to_string(),
            tags: vec![],
        }
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(2025, 1), 31);
        assert_eq!(days_in_month(2025, 4), 30);
        assert_eq!(days_in_month(2024, 2), 29); // leap year
        assert_eq!(days_in_month(2025, 2), 28);
        assert_eq!(days_in_month(2025, 12), 31);
    }

    #[test]
    fn test_leading_blanks_sunday_start() {
        // January 1, 2025 is a Wednesday -> 3 blanks (Sun, Mon, Tue)
        let grid = MonthGrid::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), &[]);
        assert_eq!(grid.leading_blanks, 3);

        // June 1, 2025 is a Sunday -> no blanks
        let grid = MonthGrid::new(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(), &[]);
        assert_eq!(grid.leading_blanks, 0);
    }

    #[test]
    fn test_grid_has_one_cell_per_day() {
        let grid = MonthGrid::new(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(), &[]);
        assert_eq!(grid.days.len(), 29);
        assert_eq!(grid.days[0].day, 1);
        assert_eq!(grid.days[28].day, 29);
    }

    #[test]
    fn test_cell_takes_first_entry_only() {
        // Two entries on the same date, newest first: the cell shows the newest.
        let entries = vec![
            entry(200, "2025-01-17", Some("img")),
            entry(100, "2025-01-17", None),
        ];
        let grid = MonthGrid::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), &entries);
        let cell = grid.days[16].entry.unwrap();
        assert_eq!(cell.id, 200);
        assert!(cell.has_image);
    }

    #[test]
    fn test_cells_without_entries_are_empty() {
        let entries = vec![entry(1, "2025-01-17", None)];
        let grid = MonthGrid::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), &entries);
        assert!(grid.days[0].entry.is_none());
        assert!(grid.days[16].entry.is_some());
        assert!(!grid.days[16].entry.unwrap().has_image);
    }

    #[test]
    fn test_entries_from_other_months_ignored() {
        let entries = vec![entry(1, "2025-02-17", None)];
        let grid = MonthGrid::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), &entries);
        assert!(grid.days.iter().all(|d| d.entry.is_none()));
    }

    #[test]
    fn test_title() {
        let grid = MonthGrid::new(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(), &[]);
        assert_eq!(grid.title(), "January 2025");
    }

    #[test]
    fn test_parse_month() {
        assert_eq!(
            parse_month("2025-01"),
            Some(NaiveDate::from_ymd_opt(2025, 1, 1).unwrap())
        );
        assert_eq!(parse_month("2025-13"), None);
        assert_eq!(parse_month("garbage"), None);
    }

    #[test]
    fn test_month_start() {
        assert_eq!(
            month_start(NaiveDate::from_ymd_opt(2025, 1, 17).unwrap()),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
    }
}

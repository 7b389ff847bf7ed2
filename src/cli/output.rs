//! Output formatting utilities

use crate::domain::calendar::MonthGrid;
use crate::domain::{Entry, Mood};
use chrono::NaiveDate;

/// Render one entry. Entries with a photo get the `[photo]` marker in the
/// header line (the polaroid style); text-only entries don't (the note
/// style).
pub fn format_entry_card(entry: &Entry) -> String {
    let mut out = String::new();

    if entry.has_image() {
        out.push_str(&format!(
            "{}  {}  [photo]  {} {}\n",
            entry.id,
            entry.date,
            entry.mood.id(),
            entry.mood.label()
        ));
    } else {
        out.push_str(&format!(
            "{}  {}  {} {}\n",
            entry.id,
            entry.date,
            entry.mood.id(),
            entry.mood.label()
        ));
    }

    for line in entry.text.lines() {
        out.push_str(&format!("  {}\n", line));
    }

    out.push_str(&format!("  @ {}", entry.location));
    if !entry.tags.is_empty() {
        out.push_str(&format!("  {}", entry.tags.join(" ")));
    }
    out.push('\n');

    out
}

/// Render a filtered entry list for the home view
pub fn format_entry_list(entries: &[&Entry]) -> String {
    if entries.is_empty() {
        return "No moments found".to_string();
    }

    entries
        .iter()
        .map(|e| format_entry_card(e))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the month grid. Day markers: `*` photo entry, `+` note entry.
/// The selected day is wrapped in brackets.
pub fn format_calendar(grid: &MonthGrid, selected: Option<NaiveDate>) -> String {
    let mut out = String::new();

    out.push_str(&format!("{:^35}\n", grid.title()));
    for name in ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"] {
        out.push_str(&format!("{:^5}", name));
    }
    out.push('\n');

    let mut cells: Vec<String> = vec!["     ".to_string(); grid.leading_blanks];
    for day in &grid.days {
        let marker = match day.entry {
            Some(cell) if cell.has_image => '*',
            Some(_) => '+',
            None => ' ',
        };
        let cell = if selected == Some(day.date) {
            format!("[{:>2}{}]", day.day, marker)
        } else {
            format!(" {:>2}{} ", day.day, marker)
        };
        cells.push(cell);
    }

    for week in cells.chunks(7) {
        let line: String = week.concat();
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

/// Render the entry list under the calendar for a selected date
pub fn format_day_entries(date: NaiveDate, entries: &[&Entry]) -> String {
    let mut out = format!("-- {} --\n", date.format("%B %-d"));
    if entries.is_empty() {
        out.push_str("No memories yet");
    } else {
        out.push_str(
            &entries
                .iter()
                .map(|e| format_entry_card(e))
                .collect::<Vec<_>>()
                .join("\n"),
        );
    }
    out
}

/// Render the gallery: photo entries only, newest first
pub fn format_gallery(entries: &[Entry]) -> String {
    let photos: Vec<&Entry> = entries.iter().filter(|e| e.has_image()).collect();
    if photos.is_empty() {
        return "No photos yet".to_string();
    }

    let mut out = String::new();
    for entry in photos {
        out.push_str(&format!("{}  {}  @ {}\n", entry.id, entry.date, entry.location));
        if let Some(first_line) = entry.text.lines().next() {
            out.push_str(&format!("  {}\n", first_line));
        }
    }
    out
}

/// Render the mood table
pub fn format_moods() -> String {
    let mut out = String::new();
    for mood in Mood::ALL {
        out.push_str(&format!("{:<8} {}\n", mood.id(), mood.label()));
    }
    out
}

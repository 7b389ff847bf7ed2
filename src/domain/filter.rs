//! Entry filtering for the views

use crate::domain::Entry;
use chrono::NaiveDate;

/// Current view selection: an optional selected calendar date and an optional
/// free-text search term. Both filters are applied as a conjunction; with
/// neither set, every entry passes.
///
/// Filtering never mutates the entry list; views recompute it on every
/// render from the current entries and selection.
#[derive(Debug, Clone, Default)]
pub struct EntryFilter {
    pub date: Option<NaiveDate>,
    pub search: Option<String>,
}

impl EntryFilter {
    pub fn none() -> Self {
        EntryFilter::default()
    }

    pub fn for_date(date: NaiveDate) -> Self {
        EntryFilter {
            date: Some(date),
            search: None,
        }
    }

    /// True when at least one filter is active
    pub fn is_active(&self) -> bool {
        self.date.is_some() || self.search_term().is_some()
    }

    // A blank search box is no filter at all.
    fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }

    pub fn matches(&self, entry: &Entry) -> bool {
        if let Some(date) = self.date {
            if entry.date != date {
                return false;
            }
        }

        if let Some(term) = self.search_term() {
            let term = term.to_lowercase();
            let matches_text = entry.text.to_lowercase().contains(&term);
            let matches_location = entry.location.to_lowercase().contains(&term);
            let matches_tag = entry
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(&term));
            if !(matches_text || matches_location || matches_tag) {
                return false;
            }
        }

        true
    }

    /// Select the matching subset, preserving the input order
    pub fn apply<'a>(&self, entries: &'a [Entry]) -> Vec<&'a Entry> {
        entries.iter().filter(|e| self.matches(e)).collect()
    }
}

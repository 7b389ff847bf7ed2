//! Entry editing use case

use crate::domain::tags::extract_hashtags;
use crate::domain::{Entry, Mood};
use crate::error::{MomoError, Result};
use crate::infrastructure::EntryRepository;
use chrono::{Local, NaiveDate};

/// Tag applied when the user provides none and the text carries no hashtags
pub const DEFAULT_TAG: &str = "#Daily";

/// User input for one entry, before validation
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub date: Option<NaiveDate>,
    pub text: String,
    pub image: Option<String>,
    pub location: Option<String>,
    pub mood: Option<Mood>,
    pub tags: Vec<String>,
}

impl EntryDraft {
    /// Check the text-or-photo invariant and fill in defaults, producing the
    /// record that will be persisted under `id`.
    ///
    /// Defaults: date → `today`; location → "Unknown"; mood → the first
    /// variant; tags → hashtags found in the text, or the single default tag.
    pub fn validate(self, id: u64, today: NaiveDate) -> Result<Entry> {
        if self.text.trim().is_empty() && self.image.is_none() {
            return Err(MomoError::EmptyEntry);
        }

        let location = self
            .location
            .map(|l| l.trim().to_string())
            .filter(|l| !l.is_empty())
            .unwrap_or_else(|| crate::domain::entry::DEFAULT_LOCATION.to_string());

        let tags = if !self.tags.is_empty() {
            self.tags
        } else {
            let found = extract_hashtags(&self.text);
            if found.is_empty() {
                vec![DEFAULT_TAG.to_string()]
            } else {
                found
            }
        };

        Ok(Entry {
            id,
            date: self.date.unwrap_or(today),
            image: self.image,
            text: self.text,
            mood: self.mood.unwrap_or_default(),
            location,
            tags,
        })
    }
}

/// Service for creating and updating entries
pub struct EditorService<'a> {
    repository: &'a mut EntryRepository,
}

impl<'a> EditorService<'a> {
    /// Create a new editor service
    pub fn new(repository: &'a mut EntryRepository) -> Self {
        EditorService { repository }
    }

    /// Validate and persist a new entry under a freshly minted id
    pub fn create(&mut self, draft: EntryDraft) -> Result<Entry> {
        let id = self.repository.next_id();
        let entry = draft.validate(id, Local::now().date_naive())?;
        self.repository.save(entry.clone())?;
        Ok(entry)
    }

    /// Overwrite an existing entry in place, keeping its id
    pub fn update(&mut self, id: u64, draft: EntryDraft) -> Result<Entry> {
        if self.repository.get(id).is_none() {
            return Err(MomoError::EntryNotFound(id));
        }
        let entry = draft.validate(id, Local::now().date_naive())?;
        self.repository.save(entry.clone())?;
        Ok(entry)
    }
}

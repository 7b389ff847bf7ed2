//! Journal entry record

use crate::domain::mood::{self, Mood};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Location used when the user leaves the field blank
pub const DEFAULT_LOCATION: &str = "Unknown";

/// One journal record.
///
/// Serialized as a JSON object with fields in this order:
/// `id, date, image, text, mood, location, tags`. The same shape is used for
/// stored records and for export/import documents.
///
/// Invariant (enforced by the editor at validation time, not by the store):
/// `text` is non-empty or `image` is present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Unique id, minted from Unix milliseconds at creation. Never changes.
    pub id: u64,
    /// Calendar date, serialized as zero-padded YYYY-MM-DD
    pub date: NaiveDate,
    /// Base64 of a downsized JPEG (longest edge ≤ 1024 px)
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub text: String,
    #[serde(default, deserialize_with = "mood::deserialize_lenient")]
    pub mood: Mood,
    #[serde(default = "default_location")]
    pub location: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

fn default_location() -> String {
    DEFAULT_LOCATION.to_string()
}

impl Entry {
    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}

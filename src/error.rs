//! Error types for momo

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the momo application
#[derive(Debug, Error)]
pub enum MomoError {
    #[error("Not a momo journal: {0}")]
    NotInitialized(PathBuf),

    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Entry needs some text or a photo")]
    EmptyEntry,

    #[error("Entry not found: {0}")]
    EntryNotFound(u64),

    #[error("Image decode error: {0}")]
    ImageDecode(String),

    #[error("Caption service error: {0}")]
    Transport(String),

    #[error("Import parse error: {0}")]
    ImportParse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl MomoError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            MomoError::NotInitialized(_) => 2,
            MomoError::EmptyEntry => 3,
            MomoError::EntryNotFound(_) => 4,
            MomoError::ImportParse(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            MomoError::NotInitialized(path) => {
                format!(
                    "Not a momo journal: {}\n\n\
                    Suggestions:\n\
                    • Run 'momo init' in this directory to create a new journal\n\
                    • Navigate to an existing momo directory\n\
                    • Set MOMO_ROOT environment variable to your journal path",
                    path.display()
                )
            }
            MomoError::EmptyEntry => {
                "Entry needs some text or a photo\n\n\
                Suggestions:\n\
                • Pass some text: momo add \"a small moment\"\n\
                • Attach a photo: momo add --image photo.jpg\n\
                • Let the caption service write one: momo add --image photo.jpg --suggest"
                    .to_string()
            }
            MomoError::EntryNotFound(id) => {
                format!(
                    "Entry not found: {}\n\n\
                    Suggestions:\n\
                    • Use 'momo list' to see entry ids\n\
                    • Entry ids never change once created",
                    id
                )
            }
            MomoError::ImageDecode(msg) => {
                format!(
                    "{}\n\n\
                    Suggestions:\n\
                    • Check that the file is a readable image (jpeg, png, webp, ...)\n\
                    • Re-export the photo and try again",
                    msg
                )
            }
            MomoError::ImportParse(msg) => {
                format!(
                    "Import parse error: {}\n\n\
                    The journal was NOT modified.\n\n\
                    Suggestions:\n\
                    • The document must be a JSON array of entries, as written by 'momo export'\n\
                    • Check the file for truncation or manual edits",
                    msg
                )
            }
            MomoError::Config(msg) => {
                if msg.contains("Invalid date") {
                    format!(
                        "{}\n\n\
                        Expected format: YYYY-MM-DD\n\
                        Example: momo add \"hello\" --date 2025-01-17",
                        msg
                    )
                } else if msg.contains("Invalid mood") {
                    format!("{}\n\nUse 'momo moods' to see the ten moods", msg)
                } else {
                    msg.clone()
                }
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using MomoError
pub type Result<T> = std::result::Result<T, MomoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_initialized_suggestion() {
        let err = MomoError::NotInitialized(PathBuf::from("/tmp/test"));
        let msg = err.display_with_suggestions();
        assert!(msg.contains("momo init"));
        assert!(msg.contains("MOMO_ROOT"));
        assert!(msg.contains("Suggestions"));
    }

    #[test]
    fn test_empty_entry_suggestions() {
        let err = MomoError::EmptyEntry;
        let msg = err.display_with_suggestions();
        assert!(msg.contains("momo add"));
        assert!(msg.contains("--image"));
    }

    #[test]
    fn test_entry_not_found_suggestions() {
        let err = MomoError::EntryNotFound(42);
        let msg = err.display_with_suggestions();
        assert!(msg.contains("42"));
        assert!(msg.contains("momo list"));
    }

    #[test]
    fn test_import_parse_preserves_journal_note() {
        let err = MomoError::ImportParse("expected value at line 1".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("NOT modified"));
        assert!(msg.contains("momo export"));
    }

    #[test]
    fn test_config_invalid_date_suggestions() {
        let err = MomoError::Config("Invalid date: '17/01/2025'".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("YYYY-MM-DD"));
    }

    #[test]
    fn test_config_invalid_mood_suggestions() {
        let err = MomoError::Config("Invalid mood: 'grumpy'".to_string());
        let msg = err.display_with_suggestions();
        assert!(msg.contains("momo moods"));
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            MomoError::NotInitialized(PathBuf::from("/tmp")).exit_code(),
            2
        );
        assert_eq!(MomoError::EmptyEntry.exit_code(), 3);
        assert_eq!(MomoError::EntryNotFound(1).exit_code(), 4);
        assert_eq!(MomoError::ImportParse("bad".into()).exit_code(), 5);
        assert_eq!(MomoError::Storage("disk full".into()).exit_code(), 1);
    }

    #[test]
    fn test_other_errors_fallback() {
        let err = MomoError::Storage("write failed".to_string());
        let msg = err.display_with_suggestions();
        assert_eq!(msg, "Storage error: write failed");
    }
}

//! Backup and restore use case

use crate::error::Result;
use crate::infrastructure::{EntryRepository, ImportOutcome};

/// Snapshot the whole journal as one JSON array
pub fn export_entries(repository: &EntryRepository) -> Result<String> {
    repository.export_all()
}

/// Replace the whole journal with the entries in `document`.
///
/// The document is parsed before anything destructive happens; the caller is
/// responsible for confirming the replacement with the user first.
pub fn import_entries(
    repository: &mut EntryRepository,
    document: &str,
) -> Result<ImportOutcome> {
    repository.import_replace(document)
}

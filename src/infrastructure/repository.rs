//! Entry repository
//!
//! The only component that reads or writes the keyed store. Holds the
//! canonical in-memory entry list used by every view, newest first, and
//! keeps it consistent with the store on every mutation: the list is updated
//! only after the store confirms the write.

use crate::domain::Entry;
use crate::error::{MomoError, Result};
use crate::infrastructure::store::{FileStore, KeyValueStore};
use chrono::Utc;
use std::fs;

/// Flat-array document of the old storage layout, relative to `.momo/`
pub const LEGACY_FILE: &str = "entries.json";

/// Where the legacy document is archived after migration, relative to `.momo/`
pub const LEGACY_BACKUP_FILE: &str = "backup/entries.json";

/// Marker recording that the legacy migration already ran, relative to `.momo/`
pub const MIGRATION_MARKER: &str = "migrated";

/// Result of a bulk import
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportOutcome {
    pub written: usize,
    pub failed: usize,
}

pub struct EntryRepository {
    store: FileStore,
    entries: Vec<Entry>,
}

impl EntryRepository {
    /// Open the repository over a store: run the one-time legacy migration,
    /// then load every record, newest first. Records that fail to parse are
    /// skipped with a warning rather than aborting startup.
    pub fn open(store: FileStore) -> Result<Self> {
        store.open_or_create()?;
        migrate_legacy(&store)?;

        let mut entries = Vec::new();
        for (id, record) in store.get_all()? {
            match serde_json::from_str::<Entry>(&record) {
                Ok(entry) => entries.push(entry),
                Err(e) => log::warn!("skipping unreadable record {}: {}", id, e),
            }
        }
        entries.sort_by(|a, b| b.id.cmp(&a.id));

        Ok(EntryRepository { store, entries })
    }

    /// Discover the journal root and open it
    pub fn discover_and_open() -> Result<Self> {
        Self::open(FileStore::discover()?)
    }

    pub fn store(&self) -> &FileStore {
        &self.store
    }

    /// The canonical list, sorted by id descending (newest first)
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn get(&self, id: u64) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Mint an id for a new entry: current Unix milliseconds, bumped past
    /// the newest existing id so ids stay strictly monotonic.
    pub fn next_id(&self) -> u64 {
        let now = Utc::now().timestamp_millis() as u64;
        match self.entries.first() {
            Some(newest) if newest.id >= now => newest.id + 1,
            _ => now,
        }
    }

    /// Persist an entry, then mirror it into the list: replace-in-place when
    /// the id exists, else prepend. A failed store write leaves the list
    /// untouched so the views never diverge from disk.
    pub fn save(&mut self, entry: Entry) -> Result<()> {
        let record = serde_json::to_string(&entry)
            .map_err(|e| MomoError::Storage(format!("cannot serialize entry {}: {}", entry.id, e)))?;
        self.store.put(entry.id, &record)?;

        match self.entries.iter().position(|e| e.id == entry.id) {
            Some(pos) => self.entries[pos] = entry,
            None => self.entries.insert(0, entry),
        }
        Ok(())
    }

    /// Delete an entry from the store, then from the list. Unknown ids are
    /// a no-op, matching the store's delete semantics.
    pub fn remove(&mut self, id: u64) -> Result<()> {
        self.store.delete(id)?;
        self.entries.retain(|e| e.id != id);
        Ok(())
    }

    /// Snapshot of the full list as one pretty-printed JSON array
    pub fn export_all(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.entries)
            .map_err(|e| MomoError::Storage(format!("cannot serialize export: {}", e)))
    }

    /// Replace the whole store with the entries parsed from `document`.
    ///
    /// The document is parsed in full before anything is cleared, so a
    /// malformed document never destroys data. After `clear`, each record is
    /// written independently (best effort): a mid-loop failure leaves the
    /// successfully written prefix in place, and the list mirrors exactly
    /// what reached the store.
    pub fn import_replace(&mut self, document: &str) -> Result<ImportOutcome> {
        let incoming: Vec<Entry> = serde_json::from_str(document)
            .map_err(|e| MomoError::ImportParse(e.to_string()))?;

        self.store.clear()?;

        let mut written = Vec::with_capacity(incoming.len());
        let mut failed = 0usize;
        for entry in incoming {
            let record = match serde_json::to_string(&entry) {
                Ok(r) => r,
                Err(e) => {
                    log::warn!("import: cannot serialize entry {}: {}", entry.id, e);
                    failed += 1;
                    continue;
                }
            };
            match self.store.put(entry.id, &record) {
                Ok(()) => written.push(entry),
                Err(e) => {
                    log::warn!("import: failed to write entry {}: {}", entry.id, e);
                    failed += 1;
                }
            }
        }

        written.sort_by(|a, b| b.id.cmp(&a.id));
        self.entries = written;

        Ok(ImportOutcome {
            written: self.entries.len(),
            failed,
        })
    }
}

/// One-time migration from the old flat-array layout.
///
/// If `.momo/entries.json` exists, copy its entries into the keyed store one
/// by one, archive the legacy document under `.momo/backup/`, remove the
/// legacy file, and write the `migrated` marker. Guarded by the marker and
/// safe to skip when the legacy file is absent or empty. A legacy file that
/// fails to parse is left in place untouched.
fn migrate_legacy(store: &FileStore) -> Result<()> {
    let momo_dir = store.momo_dir();
    let marker = momo_dir.join(MIGRATION_MARKER);
    if marker.exists() {
        return Ok(());
    }

    let legacy = momo_dir.join(LEGACY_FILE);
    if !legacy.exists() {
        return Ok(());
    }

    let contents = fs::read_to_string(&legacy)
        .map_err(|e| MomoError::Storage(format!("cannot read {}: {}", legacy.display(), e)))?;

    if contents.trim().is_empty() {
        fs::remove_file(&legacy)?;
        write_marker(&marker)?;
        log::info!("removed empty legacy store {}", legacy.display());
        return Ok(());
    }

    let legacy_entries: Vec<Entry> = match serde_json::from_str(&contents) {
        Ok(entries) => entries,
        Err(e) => {
            log::warn!(
                "legacy store {} does not parse, leaving it untouched: {}",
                legacy.display(),
                e
            );
            return Ok(());
        }
    };

    let count = legacy_entries.len();
    for entry in legacy_entries {
        let record = serde_json::to_string(&entry)
            .map_err(|e| MomoError::Storage(format!("cannot serialize entry {}: {}", entry.id, e)))?;
        store.put(entry.id, &record)?;
    }

    // Preserve the legacy document under a backup key, then clear the
    // legacy key and record that migration ran.
    let backup = momo_dir.join(LEGACY_BACKUP_FILE);
    if let Some(parent) = backup.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(&legacy, &backup)?;
    fs::remove_file(&legacy)?;
    write_marker(&marker)?;

    log::info!("migrated {} legacy entries into the keyed store", count);
    Ok(())
}

fn write_marker(marker: &std::path::Path) -> Result<()> {
    fs::write(marker, format!("{}\n", Utc::now().to_rfc3339()))?;
    Ok(())
}

//! Keyed on-disk store for entry records

use crate::error::{MomoError, Result};
use crate::infrastructure::Config;
use std::fs;
use std::path::{Path, PathBuf};

/// Durable keyed storage for serialized records.
///
/// The store is schema-agnostic: it moves opaque string documents keyed by
/// id; (de)serialization belongs to the repository layer. `put` has upsert
/// semantics and is atomic per key.
pub trait KeyValueStore {
    /// Idempotently ensure the storage location exists
    fn open_or_create(&self) -> Result<()>;

    /// Read one record, `None` if absent
    fn get(&self, id: u64) -> Result<Option<String>>;

    /// Read every record, in unspecified order; the caller sorts
    fn get_all(&self) -> Result<Vec<(u64, String)>>;

    /// Insert or overwrite the record with this id
    fn put(&self, id: u64, record: &str) -> Result<()>;

    /// Remove the record; a no-op (not an error) if absent
    fn delete(&self, id: u64) -> Result<()>;

    /// Remove all records; used only by import-replace
    fn clear(&self) -> Result<()>;
}

/// File system implementation: one JSON document per id under
/// `<root>/.momo/entries/<id>.json`
#[derive(Debug, Clone)]
pub struct FileStore {
    pub root: PathBuf,
}

impl FileStore {
    /// Create a store rooted at the given journal directory
    pub fn new(root: PathBuf) -> Self {
        FileStore { root }
    }

    /// Discover the journal root.
    /// First checks the MOMO_ROOT environment variable, then walks up from
    /// the current directory looking for a `.momo` directory.
    pub fn discover() -> Result<Self> {
        if let Ok(root_path) = std::env::var("MOMO_ROOT") {
            let path = PathBuf::from(root_path);
            if Self::has_momo_dir(&path) {
                return Ok(FileStore::new(path));
            } else {
                return Err(MomoError::Config(format!(
                    "MOMO_ROOT is set to '{}' but no .momo directory found. \
                    Run 'momo init' in that directory or unset MOMO_ROOT.",
                    path.display()
                )));
            }
        }

        let current_dir = std::env::current_dir()?;
        Self::discover_from(&current_dir)
    }

    /// Discover the journal root by walking up from a specific directory
    pub fn discover_from(start: &Path) -> Result<Self> {
        let mut current = start.to_path_buf();

        loop {
            if Self::has_momo_dir(&current) {
                return Ok(FileStore::new(current));
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => {
                    return Err(MomoError::NotInitialized(start.to_path_buf()));
                }
            }
        }
    }

    fn has_momo_dir(path: &Path) -> bool {
        path.join(".momo").is_dir()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The `.momo` metadata directory
    pub fn momo_dir(&self) -> PathBuf {
        self.root.join(".momo")
    }

    /// The record directory
    pub fn entries_dir(&self) -> PathBuf {
        self.momo_dir().join("entries")
    }

    fn record_path(&self, id: u64) -> PathBuf {
        self.entries_dir().join(format!("{}.json", id))
    }

    pub fn is_initialized(&self) -> bool {
        Self::has_momo_dir(&self.root)
    }

    /// Create the `.momo` directory structure
    pub fn initialize(&self) -> Result<()> {
        let momo_dir = self.momo_dir();

        if momo_dir.exists() {
            return Err(MomoError::Config(format!(
                "Directory already initialized: {}",
                self.root.display()
            )));
        }

        fs::create_dir_all(&momo_dir).map_err(|e| {
            MomoError::StorageUnavailable(format!(
                "cannot create {}: {}",
                momo_dir.display(),
                e
            ))
        })?;
        self.open_or_create()?;
        Ok(())
    }

    /// Load configuration from .momo/config.toml
    pub fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    /// Save configuration to .momo/config.toml
    pub fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }
}

impl KeyValueStore for FileStore {
    fn open_or_create(&self) -> Result<()> {
        let dir = self.entries_dir();
        fs::create_dir_all(&dir).map_err(|e| {
            MomoError::StorageUnavailable(format!("cannot create {}: {}", dir.display(), e))
        })
    }

    fn get(&self, id: u64) -> Result<Option<String>> {
        let path = self.record_path(id);
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| MomoError::Storage(format!("cannot read {}: {}", path.display(), e)))
    }

    fn get_all(&self) -> Result<Vec<(u64, String)>> {
        let dir = self.entries_dir();
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut records = Vec::new();
        let listing = fs::read_dir(&dir)
            .map_err(|e| MomoError::Storage(format!("cannot read {}: {}", dir.display(), e)))?;

        for entry in listing {
            let Ok(entry) = entry else {
                continue;
            };
            let path = entry.path();
            if !path.is_file() {
                continue;
            }
            // Only consider <id>.json files; temp files and strays are skipped.
            let Some(id) = Self::id_from_path(&path) else {
                continue;
            };
            let content = fs::read_to_string(&path).map_err(|e| {
                MomoError::Storage(format!("cannot read {}: {}", path.display(), e))
            })?;
            records.push((id, content));
        }

        Ok(records)
    }

    fn put(&self, id: u64, record: &str) -> Result<()> {
        self.open_or_create()?;
        let path = self.record_path(id);

        // Atomic per key: write a temp file in the same directory, then
        // rename into place.
        let tmp_name = format!("{}.momo-tmp-{}", id, std::process::id());
        let tmp_path = path.with_file_name(tmp_name);

        fs::write(&tmp_path, record).map_err(|e| {
            MomoError::Storage(format!("cannot write {}: {}", tmp_path.display(), e))
        })?;

        if path.exists() {
            // rename does not overwrite on every platform
            fs::remove_file(&path).map_err(|e| {
                MomoError::Storage(format!("cannot replace {}: {}", path.display(), e))
            })?;
        }

        fs::rename(&tmp_path, &path)
            .map_err(|e| MomoError::Storage(format!("cannot write {}: {}", path.display(), e)))
    }

    fn delete(&self, id: u64) -> Result<()> {
        let path = self.record_path(id);
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(MomoError::Storage(format!(
                "cannot delete {}: {}",
                path.display(),
                e
            ))),
        }
    }

    fn clear(&self) -> Result<()> {
        let dir = self.entries_dir();
        if !dir.exists() {
            return Ok(());
        }
        let listing = fs::read_dir(&dir)
            .map_err(|e| MomoError::Storage(format!("cannot read {}: {}", dir.display(), e)))?;
        for entry in listing {
            let Ok(entry) = entry else {
                continue;
            };
            let path = entry.path();
            if path.is_file() && Self::id_from_path(&path).is_some() {
                fs::remove_file(&path).map_err(|e| {
                    MomoError::Storage(format!("cannot delete {}: {}", path.display(), e))
                })?;
            }
        }
        Ok(())
    }
}

impl FileStore {
    fn id_from_path(path: &Path) -> Option<u64> {
        let name = path.file_name()?.to_str()?;
        let stem = name.strip_suffix(".json")?;
        stem.parse::<u64>().ok()
    }
}

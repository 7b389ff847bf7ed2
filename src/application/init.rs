//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileStore};
use std::fs;
use std::path::Path;

/// Initialize a new journal at the specified path.
pub fn init(path: &Path) -> Result<()> {
    // Create the directory if it doesn't exist
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let store = FileStore::new(path.to_path_buf());

    // Create the .momo directory structure
    store.initialize()?;

    // Save default config
    let config = Config::new();
    store.save_config(&config)?;

    println!("Initialized momo journal at {}", path.display());

    Ok(())
}

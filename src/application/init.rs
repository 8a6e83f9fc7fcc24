//! Initialize journal use case

use crate::error::Result;
use crate::infrastructure::{Config, FileSystemRepository, JournalRepository};
use log::info;
use std::fs;
use std::path::Path;

/// Initialize a new, empty journal at the specified path.
pub fn init(path: &Path) -> Result<FileSystemRepository> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());

    repo.initialize()?;
    repo.save_config(&Config::new())?;
    repo.save_entries(&[])?;

    info!("initialized journal at {}", path.display());
    Ok(repo)
}

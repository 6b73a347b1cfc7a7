//! Filesystem side of the generators.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;

/// A rendered file waiting to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFile {
    /// Path relative to the generator's target directory
    pub path: PathBuf,
    pub content: String,
}

impl GeneratedFile {
    pub fn new<P: Into<PathBuf>, S: Into<String>>(path: P, content: S) -> Self {
        Self { path: path.into(), content: content.into() }
    }
}

/// Resolves `path` against the current working directory.
pub fn absolute_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        std::env::current_dir().unwrap_or_default().join(path)
    }
}

/// Creates `path` and all of its parents. Existing directories are fine.
pub fn create_dir_all<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = absolute_path(path);
    debug!("Creating directory: {}", path.display());
    fs::create_dir_all(path)?;
    Ok(())
}

/// Writes `content` to `path`, creating parent directories and replacing
/// whatever was there before.
pub fn write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let path = absolute_path(path);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    debug!("Writing file: {}", path.display());
    fs::write(path, content)?;
    Ok(())
}

/// Returns true when `dir` exists and has at least one entry.
pub fn has_entries<P: AsRef<Path>>(dir: P) -> Result<bool> {
    let dir = dir.as_ref();
    if !dir.is_dir() {
        return Ok(false);
    }
    Ok(fs::read_dir(dir)?.next().is_some())
}

/// Writes every file below `root` in order and returns the written paths.
///
/// Files written before a failure stay on disk.
pub fn write_all<P: AsRef<Path>>(root: P, files: &[GeneratedFile]) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();
    let mut written = Vec::with_capacity(files.len());
    for file in files {
        let target = root.join(&file.path);
        write_file(&target, &file.content)?;
        written.push(file.path.clone());
    }
    Ok(written)
}

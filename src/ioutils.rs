use std::path::{Path, PathBuf};

use crate::constants::VCS_DIR;
use crate::error::{Error, Result};

/// Whether `dir` has no entries, or only a version-control metadata folder.
///
/// A missing directory counts as empty.
pub fn is_empty_dir<P: AsRef<Path>>(dir: P) -> Result<bool> {
    let dir = dir.as_ref();
    if !dir.exists() {
        return Ok(true);
    }
    let names = std::fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.file_name()))
        .collect::<std::io::Result<Vec<_>>>()?;
    Ok(names.is_empty() || (names.len() == 1 && names[0] == VCS_DIR))
}

/// Removes every entry directly under `dir`, leaving `dir` itself in place.
pub fn empty_dir<P: AsRef<Path>>(dir: P) -> Result<()> {
    let dir = dir.as_ref();
    if !dir.exists() {
        return Ok(());
    }
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        log::debug!("Removing '{}'", path.display());
        if path.is_dir() && !path.is_symlink() {
            std::fs::remove_dir_all(&path)?;
        } else {
            std::fs::remove_file(&path)?;
        }
    }
    Ok(())
}

/// Ensures the output directory exists and is safe to write to.
///
/// With `overwrite` the existing contents are cleared first; otherwise a
/// missing directory is created along with its parents.
pub fn prepare_target<P: AsRef<Path>>(output_dir: P, overwrite: bool) -> Result<PathBuf> {
    let output_dir = output_dir.as_ref();
    if overwrite {
        log::info!("Clearing existing contents of '{}'", output_dir.display());
        empty_dir(output_dir)?;
    }
    if !output_dir.exists() {
        log::info!("Creating directory '{}'", output_dir.display());
        create_dir_all(output_dir)?;
    }
    Ok(output_dir.to_path_buf())
}

/// Refuses a non-empty output directory unless `force` is set.
pub fn ensure_writable_output<P: AsRef<Path>>(output_dir: P, force: bool) -> Result<()> {
    let output_dir = output_dir.as_ref();
    if !force && !is_empty_dir(output_dir)? {
        return Err(Error::OutputDirectoryExistsError {
            output_dir: output_dir.display().to_string(),
        });
    }
    Ok(())
}

pub fn create_dir_all<P: AsRef<Path>>(dest_path: P) -> Result<()> {
    std::fs::create_dir_all(dest_path.as_ref()).map_err(Error::IoError)
}

pub fn write_file<P: AsRef<Path>>(content: &str, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::write(dest_path, content).map_err(Error::IoError)
}

pub fn copy_file<P: AsRef<Path>>(source_path: P, dest_path: P) -> Result<()> {
    let dest_path = dest_path.as_ref();
    if let Some(parent) = dest_path.parent() {
        create_dir_all(parent)?;
    }
    std::fs::copy(source_path.as_ref(), dest_path).map(|_| ()).map_err(Error::IoError)
}

pub fn read_from(mut reader: impl std::io::Read) -> Result<String> {
    let mut buf = String::new();
    reader.read_to_string(&mut buf).map_err(Error::IoError)?;
    Ok(buf)
}

/// Path of `path` relative to `base`, falling back to `path` itself.
pub fn relative_to(path: &Path, base: &Path) -> PathBuf {
    path.strip_prefix(base).map(Path::to_path_buf).unwrap_or_else(|_| path.to_path_buf())
}

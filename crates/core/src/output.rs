// crates/core/src/output.rs
//! Atomic output persistence.
//!
//! Generation runs fully in memory before anything is written; this module
//! guarantees the destination file is either the previous content or the
//! complete new content, never a partial write. The temp file is cleaned
//! up on every failure path when it drops.

use crate::error::WriteError;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Write `contents` to `path`, overwriting any previous file, via a
/// temporary file in the destination directory followed by an atomic
/// rename.
pub fn write_atomic(path: &Path, contents: &str) -> Result<(), WriteError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| WriteError::io(path, e))?;
    tmp.write_all(contents.as_bytes())
        .map_err(|e| WriteError::io(path, e))?;
    tmp.flush().map_err(|e| WriteError::io(path, e))?;
    tmp.persist(path).map_err(|e| WriteError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;

    debug!(path = %path.display(), bytes = contents.len(), "wrote output");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_contents() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("category_migration_code.txt");
        write_atomic(&path, "modelBuilder...").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "modelBuilder...");
    }

    #[test]
    fn test_overwrites_previous_run() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_atomic(&path, "first run").unwrap();
        write_atomic(&path, "second").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_leaves_no_temp_files_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_atomic(&path, "content").unwrap();
        let entries: Vec<_> = std::fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_writes_into_nested_directory() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.txt");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        write_atomic(&path, "x").unwrap();
        assert!(path.exists());
    }
}

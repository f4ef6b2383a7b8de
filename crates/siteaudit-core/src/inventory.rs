//! Snapshots of the site's directories at scan time.

use anyhow::{Context, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// List the file names under `dir` ending in `ext`, sorted.
/// A missing directory yields an empty inventory; any other failure is fatal.
pub fn list_files(dir: &Path, ext: &str) -> Result<Vec<String>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(e).with_context(|| format!("failed to list {}", dir.display())),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.with_context(|| format!("failed to list {}", dir.display()))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if !name.ends_with(ext) {
            continue;
        }
        let file_type = entry
            .file_type()
            .with_context(|| format!("failed to stat {}", entry.path().display()))?;
        if file_type.is_file() {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}

/// Size of `path` in bytes, or None when the file cannot be found (rendered
/// as a "file not found" sentinel by the report layer).
pub fn file_size(path: &Path) -> Option<u64> {
    fs::metadata(path).ok().map(|m| m.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn list_files_filters_and_sorts() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("b.css"), "b").unwrap();
        fs::write(dir.path().join("a.css"), "a").unwrap();
        fs::write(dir.path().join("notes.txt"), "x").unwrap();
        fs::create_dir(dir.path().join("sub.css")).unwrap();
        assert_eq!(list_files(dir.path(), ".css").unwrap(), vec!["a.css", "b.css"]);
    }

    #[test]
    fn list_files_missing_dir_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("css");
        assert!(list_files(&missing, ".css").unwrap().is_empty());
    }

    #[test]
    fn file_size_sentinel() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("a.css");
        fs::write(&path, [0u8; 2048]).unwrap();
        assert_eq!(file_size(&path), Some(2048));
        assert_eq!(file_size(&dir.path().join("missing.css")), None);
    }
}

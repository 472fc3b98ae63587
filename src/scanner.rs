use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::record::{system_time_to_millis, FileRecord};

#[derive(Error, Debug)]
pub enum ImportError {
    #[error("No source given")]
    NoSources,

    #[error("Path does not exist: {0}")]
    PathNotFound(PathBuf),

    #[error("Path is not a regular file: {0}")]
    NotAFile(PathBuf),

    #[error("Permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("File name is not valid UTF-8: {0}")]
    NonUtf8Name(PathBuf),

    #[error("Failed to read metadata: {0}")]
    IoError(#[from] std::io::Error),
}

fn map_io(path: &Path, e: std::io::Error) -> ImportError {
    match e.kind() {
        std::io::ErrorKind::PermissionDenied => ImportError::PermissionDenied(path.to_path_buf()),
        std::io::ErrorKind::NotFound => ImportError::PathNotFound(path.to_path_buf()),
        _ => ImportError::IoError(e),
    }
}

/// Import either one directory or an explicit list of files
pub fn import_sources(sources: &[PathBuf]) -> Result<Vec<FileRecord>, ImportError> {
    match sources {
        [] => Err(ImportError::NoSources),
        [single] if single.is_dir() => import_directory(single),
        files => import_files(files),
    }
}

/// Regular files directly inside `target`, hidden files skipped, sorted by name
pub fn import_directory(target: &Path) -> Result<Vec<FileRecord>, ImportError> {
    debug!(path = ?target, "Scanning directory");

    if !target.exists() {
        return Err(ImportError::PathNotFound(target.to_path_buf()));
    }

    let read_dir = fs::read_dir(target).map_err(|e| map_io(target, e))?;

    let mut records = Vec::new();

    for entry in read_dir {
        let entry = entry?;
        let path = entry.path();

        trace!(entry = ?path, "Examining entry");

        // Follows symlinks so linked files are imported like regular ones
        let metadata = match fs::metadata(&path) {
            Ok(metadata) => metadata,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                warn!(path = ?path, "Skipping dangling symlink");
                continue;
            }
            Err(e) => return Err(map_io(&path, e)),
        };
        if !metadata.is_file() {
            trace!(path = ?path, "Skipping non-file");
            continue;
        }

        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                warn!(name = ?raw, "Skipping file with a non UTF-8 name");
                continue;
            }
        };

        if name.starts_with('.') {
            trace!(name = %name, "Skipping hidden file");
            continue;
        }

        let modified = metadata.modified().map_err(|e| map_io(&path, e))?;

        debug!(name = %name, "Found file");
        records.push(FileRecord::new(path, name, system_time_to_millis(modified)));
    }

    records.sort_by(|a, b| a.name.cmp(&b.name));

    debug!(count = records.len(), "Scan complete");

    Ok(records)
}

/// Explicitly selected files, in the given order; duplicates are dropped
pub fn import_files(paths: &[PathBuf]) -> Result<Vec<FileRecord>, ImportError> {
    if paths.is_empty() {
        return Err(ImportError::NoSources);
    }

    let mut seen = HashSet::new();
    let mut records = Vec::with_capacity(paths.len());

    for path in paths {
        if !path.exists() {
            return Err(ImportError::PathNotFound(path.clone()));
        }

        let metadata = fs::metadata(path).map_err(|e| map_io(path, e))?;
        if !metadata.is_file() {
            return Err(ImportError::NotAFile(path.clone()));
        }

        let name = match path.file_name().map(|n| n.to_str()) {
            Some(Some(n)) => n.to_string(),
            Some(None) => return Err(ImportError::NonUtf8Name(path.clone())),
            None => return Err(ImportError::NotAFile(path.clone())),
        };

        if !seen.insert(path.clone()) {
            debug!(path = ?path, "Skipping duplicate selection");
            continue;
        }

        let modified = metadata.modified().map_err(|e| map_io(path, e))?;
        records.push(FileRecord::new(
            path.clone(),
            name,
            system_time_to_millis(modified),
        ));
    }

    debug!(count = records.len(), "Imported selected files");

    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_import_empty_directory() {
        let dir = tempdir().unwrap();
        let result = import_directory(dir.path()).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_import_directory_files_only() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("subdir")).unwrap();
        fs::write(dir.path().join("b.TXT"), "b").unwrap();
        fs::write(dir.path().join("a.jpg"), "a").unwrap();

        let result = import_directory(dir.path()).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result[0].name, "a.jpg");
        assert_eq!(result[1].name, "b.TXT");
        assert_eq!(result[1].extension, ".txt");
        assert!(result[0].modified > 0);
    }

    #[test]
    fn test_import_directory_skips_hidden() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(".hidden"), "").unwrap();
        fs::write(dir.path().join("visible.txt"), "").unwrap();

        let result = import_directory(dir.path()).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "visible.txt");
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_import_directory_skips_non_utf8_names() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        let raw = dir.path().join(OsStr::from_bytes(b"caf\xe9.txt"));
        fs::write(&raw, "").unwrap();
        fs::write(dir.path().join("plain.txt"), "").unwrap();

        let result = import_directory(dir.path()).unwrap();

        let names: Vec<&str> = result.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["plain.txt"]);
        assert!(raw.exists());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_import_files_rejects_non_utf8_name() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempdir().unwrap();
        let raw = dir.path().join(OsStr::from_bytes(b"caf\xe9.txt"));
        fs::write(&raw, "").unwrap();

        let result = import_files(&[raw]);
        assert!(matches!(result, Err(ImportError::NonUtf8Name(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_import_directory_follows_symlinks() {
        let target_dir = tempdir().unwrap();
        let target = target_dir.path().join("real.txt");
        fs::write(&target, "").unwrap();

        let dir = tempdir().unwrap();
        std::os::unix::fs::symlink(&target, dir.path().join("link.txt")).unwrap();
        std::os::unix::fs::symlink(target_dir.path().join("gone.txt"), dir.path().join("dangling.txt"))
            .unwrap();

        let result = import_directory(dir.path()).unwrap();

        assert_eq!(result.len(), 1);
        assert_eq!(result[0].name, "link.txt");
        assert_eq!(result[0].path, dir.path().join("link.txt"));
    }

    #[test]
    fn test_import_directory_not_found() {
        let result = import_directory(Path::new("/nonexistent/path"));
        assert!(matches!(result, Err(ImportError::PathNotFound(_))));
    }

    #[test]
    fn test_import_files_keeps_order_and_drops_duplicates() {
        let dir = tempdir().unwrap();
        let b = dir.path().join("b.txt");
        let a = dir.path().join("a.txt");
        fs::write(&a, "").unwrap();
        fs::write(&b, "").unwrap();

        let result = import_files(&[b.clone(), a.clone(), b.clone()]).unwrap();

        let names: Vec<&str> = result.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["b.txt", "a.txt"]);
    }

    #[test]
    fn test_import_files_rejects_directory() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.txt");
        fs::write(&file, "").unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();

        let result = import_files(&[file, sub]);
        assert!(matches!(result, Err(ImportError::NotAFile(_))));
    }

    #[test]
    fn test_import_sources_dispatch() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("a.txt");
        fs::write(&file, "").unwrap();

        assert!(matches!(import_sources(&[]), Err(ImportError::NoSources)));
        assert_eq!(import_sources(&[dir.path().to_path_buf()]).unwrap().len(), 1);
        assert_eq!(import_sources(&[file]).unwrap().len(), 1);
        assert!(matches!(
            import_sources(&[dir.path().join("missing.txt")]),
            Err(ImportError::PathNotFound(_))
        ));
    }
}

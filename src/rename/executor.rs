use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::record::FileRecord;

use super::name_builder::{compute_new_name, validate_file_name};
use super::types::{
    ExecutionReport, Outcome, ProgressEvent, RecordFailure, RenameFailure, RenameMode,
    RenamedRecord,
};

/// Something that can rename a file given its handle and a new name
pub trait RenameCapability {
    /// Rename `source` to `new_name` within the same parent; returns the new path
    fn rename(&mut self, source: &Path, new_name: &str) -> Result<PathBuf, RenameFailure>;
}

/// Rename capability backed by the local filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct FsRenamer;

impl RenameCapability for FsRenamer {
    fn rename(&mut self, source: &Path, new_name: &str) -> Result<PathBuf, RenameFailure> {
        validate_file_name(new_name)?;

        if !source.exists() {
            return Err(RenameFailure::SourceMissing(source.to_path_buf()));
        }

        let destination = source
            .parent()
            .map(|p| p.join(new_name))
            .unwrap_or_else(|| PathBuf::from(new_name));

        // A case-only rename on a case-insensitive filesystem resolves to the source itself
        if destination.exists() && !is_same_file(source, &destination) {
            return Err(RenameFailure::DestinationExists(destination));
        }

        fs::rename(source, &destination).map_err(|e| match e.kind() {
            ErrorKind::PermissionDenied => RenameFailure::PermissionDenied(source.to_path_buf()),
            ErrorKind::NotFound => RenameFailure::SourceMissing(source.to_path_buf()),
            _ => RenameFailure::Io(e),
        })?;

        Ok(destination)
    }
}

fn is_same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}

/// Run a batch rename over a snapshot of records.
///
/// Records are processed strictly in order. A record whose computed name
/// equals its current name is counted but never handed to the capability.
/// A failing record is recorded in the report and the batch moves on.
/// `on_progress` fires once per record, after it has been handled.
pub fn execute<C, F>(
    snapshot: &[FileRecord],
    mode: &RenameMode,
    capability: &mut C,
    mut on_progress: F,
) -> ExecutionReport
where
    C: RenameCapability + ?Sized,
    F: FnMut(&ProgressEvent<'_>),
{
    let total = snapshot.len();
    let mut report = ExecutionReport::new(total);

    info!(total, mode = %mode.description(), "Starting batch rename");

    for record in snapshot {
        let new_name = compute_new_name(&record.name, mode);

        let outcome = if new_name == record.name {
            debug!(name = %record.name, "Name unchanged, skipping");
            report.skipped += 1;
            Outcome::Unchanged
        } else {
            match capability.rename(&record.path, &new_name) {
                Ok(destination_path) => {
                    info!("Renamed: {} -> {}", record.name, new_name);
                    report.renamed.push(RenamedRecord {
                        source_path: record.path.clone(),
                        destination_path,
                        from: record.name.clone(),
                        to: new_name.clone(),
                    });
                    Outcome::Renamed
                }
                Err(e) => {
                    warn!(from = %record.name, to = %new_name, error = %e, "Rename failed");
                    report.failures.push(RecordFailure {
                        source_path: record.path.clone(),
                        from: record.name.clone(),
                        to: new_name.clone(),
                        reason: e.to_string(),
                    });
                    Outcome::Failed
                }
            }
        };

        report.processed += 1;

        on_progress(&ProgressEvent {
            processed: report.processed,
            total,
            from: &record.name,
            to: &new_name,
            outcome,
        });
    }

    info!(
        renamed = report.renamed.len(),
        skipped = report.skipped,
        failed = report.failures.len(),
        "Batch rename finished"
    );

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::tempdir;

    /// Records every call; fails for names listed in `fail_on`
    #[derive(Default)]
    struct RecordingRenamer {
        calls: Vec<(PathBuf, String)>,
        fail_on: HashSet<String>,
    }

    impl RenameCapability for RecordingRenamer {
        fn rename(&mut self, source: &Path, new_name: &str) -> Result<PathBuf, RenameFailure> {
            self.calls.push((source.to_path_buf(), new_name.to_string()));
            if self.fail_on.contains(new_name) {
                return Err(RenameFailure::PermissionDenied(source.to_path_buf()));
            }
            Ok(source.with_file_name(new_name))
        }
    }

    fn record(name: &str) -> FileRecord {
        FileRecord::new(PathBuf::from("/files").join(name), name.to_string(), 0)
    }

    #[test]
    fn test_unchanged_name_is_counted_but_not_renamed() {
        let snapshot = vec![record("a.txt"), record("b.txt")];
        let mode = RenameMode::FindReplace {
            find: "a".to_string(),
            replace: "z".to_string(),
        };
        let mut renamer = RecordingRenamer::default();

        let report = execute(&snapshot, &mode, &mut renamer, |_| {});

        assert_eq!(renamer.calls.len(), 1);
        assert_eq!(renamer.calls[0].1, "z.txt");
        assert_eq!(report.processed, 2);
        assert_eq!(report.skipped, 1);
        assert_eq!(report.renamed.len(), 1);
        assert!(report.is_complete());
    }

    #[test]
    fn test_processes_in_snapshot_order() {
        let snapshot = vec![record("c.txt"), record("a.txt"), record("b.txt")];
        let mut renamer = RecordingRenamer::default();

        execute(&snapshot, &RenameMode::Prefix("x_".to_string()), &mut renamer, |_| {});

        let names: Vec<&str> = renamer.calls.iter().map(|(_, n)| n.as_str()).collect();
        assert_eq!(names, vec!["x_c.txt", "x_a.txt", "x_b.txt"]);
    }

    #[test]
    fn test_failure_does_not_abort_batch() {
        let snapshot = vec![record("a.txt"), record("b.txt"), record("c.txt")];
        let mut renamer = RecordingRenamer::default();
        renamer.fail_on.insert("b_1.txt".to_string());

        let report = execute(&snapshot, &RenameMode::Suffix("_1".to_string()), &mut renamer, |_| {});

        assert_eq!(renamer.calls.len(), 3);
        assert_eq!(report.processed, 3);
        assert_eq!(report.renamed.len(), 2);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].from, "b.txt");
        assert!(report.failures[0].reason.contains("permission denied"));
    }

    #[test]
    fn test_progress_is_monotonic_and_ends_at_total() {
        let snapshot = vec![record("a.txt"), record("b.txt"), record("c.txt")];
        let mut renamer = RecordingRenamer::default();
        renamer.fail_on.insert("c_x.txt".to_string());
        let mut seen = Vec::new();

        execute(&snapshot, &RenameMode::Suffix("_x".to_string()), &mut renamer, |event| {
            seen.push((event.processed, event.total, event.outcome));
        });

        assert_eq!(
            seen,
            vec![
                (1, 3, Outcome::Renamed),
                (2, 3, Outcome::Renamed),
                (3, 3, Outcome::Failed),
            ]
        );
    }

    #[test]
    fn test_empty_snapshot() {
        let mut renamer = RecordingRenamer::default();
        let report = execute(&[], &RenameMode::default(), &mut renamer, |_| {});

        assert_eq!(report.total, 0);
        assert!(report.is_complete());
        assert!(renamer.calls.is_empty());
    }

    #[test]
    fn test_fs_renamer_renames_in_place() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("a.txt");
        fs::write(&source, "content").unwrap();

        let destination = FsRenamer.rename(&source, "b.txt").unwrap();

        assert_eq!(destination, dir.path().join("b.txt"));
        assert!(!source.exists());
        assert!(destination.exists());
    }

    #[test]
    fn test_fs_renamer_refuses_overwrite() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("a.txt");
        fs::write(&source, "a").unwrap();
        fs::write(dir.path().join("b.txt"), "b").unwrap();

        let result = FsRenamer.rename(&source, "b.txt");

        assert!(matches!(result, Err(RenameFailure::DestinationExists(_))));
        assert_eq!(fs::read_to_string(dir.path().join("b.txt")).unwrap(), "b");
    }

    #[test]
    fn test_fs_renamer_missing_source() {
        let dir = tempdir().unwrap();
        let result = FsRenamer.rename(&dir.path().join("gone.txt"), "b.txt");
        assert!(matches!(result, Err(RenameFailure::SourceMissing(_))));
    }

    #[test]
    fn test_fs_renamer_rejects_invalid_name() {
        let dir = tempdir().unwrap();
        let source = dir.path().join("a.txt");
        fs::write(&source, "a").unwrap();

        let result = FsRenamer.rename(&source, "a/b.txt");

        assert!(matches!(result, Err(RenameFailure::InvalidName(_))));
        assert!(source.exists());
    }
}

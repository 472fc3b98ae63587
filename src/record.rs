use chrono::{DateTime, Local, Utc};
use serde::Serialize;
use std::path::PathBuf;
use std::time::SystemTime;

use crate::rename::split_name;

/// An imported file: its metadata plus the path it is renamed through
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// Handle used by the rename capability
    pub path: PathBuf,
    pub name: String,
    /// Lower-cased, with leading dot, or empty
    pub extension: String,
    /// Last modification time in epoch milliseconds
    pub modified: i64,
}

impl FileRecord {
    pub fn new(path: PathBuf, name: String, modified: i64) -> Self {
        let extension = extension_of(&name);
        Self {
            path,
            name,
            extension,
            modified,
        }
    }

    /// Local time formatted for table display
    pub fn modified_display(&self) -> String {
        format_millis(self.modified)
    }

    /// Apply a committed rename
    pub(crate) fn commit_rename(&mut self, path: PathBuf, name: String) {
        self.extension = extension_of(&name);
        self.path = path;
        self.name = name;
    }
}

/// Normalized extension of a file name
pub fn extension_of(name: &str) -> String {
    split_name(name).1.to_lowercase()
}

pub fn system_time_to_millis(time: SystemTime) -> i64 {
    DateTime::<Utc>::from(time).timestamp_millis()
}

pub fn format_millis(millis: i64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(millis) {
        Some(dt) => dt
            .with_timezone(&Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => "-".to_string(),
    }
}

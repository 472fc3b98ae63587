use serde::Serialize;
use std::path::PathBuf;
use thiserror::Error;

/// Naming strategy applied to every record of a batch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenameMode {
    /// Text inserted between the base name and the extension
    Suffix(String),
    /// Text put in front of the full name
    Prefix(String),
    /// Every occurrence of `find` replaced by `replace`
    FindReplace { find: String, replace: String },
}

impl Default for RenameMode {
    fn default() -> Self {
        RenameMode::Suffix(String::new())
    }
}

impl RenameMode {
    pub fn kind(&self) -> ModeKind {
        match self {
            RenameMode::Suffix(_) => ModeKind::Suffix,
            RenameMode::Prefix(_) => ModeKind::Prefix,
            RenameMode::FindReplace { .. } => ModeKind::Replace,
        }
    }

    pub fn description(&self) -> String {
        match self {
            RenameMode::Suffix(text) => format!("suffix \"{}\"", text),
            RenameMode::Prefix(text) => format!("prefix \"{}\"", text),
            RenameMode::FindReplace { find, replace } => {
                format!("replace \"{}\" -> \"{}\"", find, replace)
            }
        }
    }
}

/// Mode selector as exposed on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ModeKind {
    Suffix,
    Prefix,
    Replace,
}

impl ModeKind {
    /// Build a mode from the raw inputs; inputs not used by the kind are ignored
    pub fn into_mode(self, text: &str, find: &str, replace: &str) -> RenameMode {
        match self {
            ModeKind::Suffix => RenameMode::Suffix(text.to_string()),
            ModeKind::Prefix => RenameMode::Prefix(text.to_string()),
            ModeKind::Replace => RenameMode::FindReplace {
                find: find.to_string(),
                replace: replace.to_string(),
            },
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    #[error("new name is empty")]
    Empty,

    #[error("'{0}' is a reserved name")]
    Reserved(String),

    #[error("'{name}' contains disallowed character '{ch}'")]
    DisallowedChar { name: String, ch: char },
}

/// Why a single record could not be renamed
#[derive(Error, Debug)]
pub enum RenameFailure {
    #[error("invalid name: {0}")]
    InvalidName(#[from] NameError),

    #[error("source no longer exists: {0}")]
    SourceMissing(PathBuf),

    #[error("destination already exists: {0}")]
    DestinationExists(PathBuf),

    #[error("permission denied: {0}")]
    PermissionDenied(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A rename that went through
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenamedRecord {
    pub source_path: PathBuf,
    pub destination_path: PathBuf,
    pub from: String,
    pub to: String,
}

/// A rename that was attempted and failed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordFailure {
    pub source_path: PathBuf,
    pub from: String,
    pub to: String,
    pub reason: String,
}

/// Aggregate outcome of a batch run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExecutionReport {
    /// Size of the snapshot the batch ran over
    pub total: usize,
    /// Records handled so far, successful or not
    pub processed: usize,
    pub renamed: Vec<RenamedRecord>,
    /// Records whose name was already the computed one
    pub skipped: usize,
    pub failures: Vec<RecordFailure>,
}

impl ExecutionReport {
    pub fn new(total: usize) -> Self {
        Self {
            total,
            ..Self::default()
        }
    }

    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.processed == self.total
    }
}

/// What happened to one record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Renamed,
    Unchanged,
    Failed,
}

/// Emitted after each record of a batch
#[derive(Debug, Clone, Copy)]
pub struct ProgressEvent<'a> {
    pub processed: usize,
    pub total: usize,
    pub from: &'a str,
    pub to: &'a str,
    pub outcome: Outcome,
}

impl ProgressEvent<'_> {
    /// Whole-number completion percentage
    pub fn percent(&self) -> usize {
        if self.total == 0 {
            100
        } else {
            self.processed * 100 / self.total
        }
    }
}

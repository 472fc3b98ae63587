mod codes;

pub use codes::ExitCode;

use crate::config::ConfigError;
use crate::rename::RecordFailure;
use crate::scanner::ImportError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Source not found: {path}")]
    SourceNotFound { path: PathBuf },

    #[error("Source is not a regular file: {path}")]
    NotAFile { path: PathBuf },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("No source given")]
    NoSources,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("{failed} of {total} renames failed")]
    RenameFailures {
        failed: usize,
        total: usize,
        failures: Vec<RecordFailure>,
    },

    #[error("Aborted by user")]
    Aborted,

    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn exit_code(&self) -> ExitCode {
        match self {
            AppError::SourceNotFound { .. } => ExitCode::SourceNotFound,
            AppError::NotAFile { .. } => ExitCode::SourceNotFound,
            AppError::PermissionDenied { .. } => ExitCode::PermissionError,
            AppError::NoSources => ExitCode::InvalidArguments,
            AppError::InvalidConfig(_) => ExitCode::InvalidArguments,
            AppError::RenameFailures { .. } => ExitCode::RenameError,
            AppError::Aborted => ExitCode::Cancelled,
            AppError::Other(_) => ExitCode::GeneralError,
        }
    }

    pub fn detailed_message(&self) -> String {
        match self {
            AppError::SourceNotFound { path } => {
                format!(
                    "The specified source does not exist:\n  {}\n\n\
                     Please verify the path and try again.",
                    path.display()
                )
            }

            AppError::NotAFile { path } => {
                format!(
                    "The specified path is not a regular file:\n  {}\n\n\
                     Give either a single directory or a list of files.",
                    path.display()
                )
            }

            AppError::PermissionDenied { path } => {
                format!(
                    "Permission denied when accessing:\n  {}\n\n\
                     Please check file permissions or run with appropriate privileges.",
                    path.display()
                )
            }

            AppError::NoSources => String::from(
                "No source given.\n\n\
                 Pass a directory or one or more files to rename.",
            ),

            AppError::InvalidConfig(err) => {
                format!(
                    "{}\n\n\
                     Check the command-line flags and the PRORENAME_* environment variables.",
                    err
                )
            }

            AppError::RenameFailures {
                failed,
                total,
                failures,
            } => {
                let mut msg = format!("{} of {} files could not be renamed:\n", failed, total);
                for failure in failures.iter().take(10) {
                    msg.push_str(&format!(
                        "  - {} -> {}: {}\n",
                        failure.from, failure.to, failure.reason
                    ));
                }
                if failures.len() > 10 {
                    msg.push_str(&format!("  ... and {} more\n", failures.len() - 10));
                }
                msg.push_str("\nThe remaining files were processed normally.");
                msg
            }

            AppError::Aborted => String::from("Aborted. No files were renamed."),

            AppError::Other(message) => message.clone(),
        }
    }
}

impl From<ImportError> for AppError {
    fn from(err: ImportError) -> Self {
        match err {
            ImportError::NoSources => AppError::NoSources,
            ImportError::PathNotFound(path) => AppError::SourceNotFound { path },
            ImportError::NotAFile(path) => AppError::NotAFile { path },
            ImportError::PermissionDenied(path) => AppError::PermissionDenied { path },
            ImportError::NonUtf8Name(path) => {
                AppError::Other(format!("File name is not valid UTF-8: {}", path.display()))
            }
            ImportError::IoError(e) => AppError::Other(format!("I/O error: {}", e)),
        }
    }
}

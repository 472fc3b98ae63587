mod executor;
mod name_builder;
mod types;

pub use executor::{execute, FsRenamer, RenameCapability};
pub use name_builder::{compute_new_name, split_name, validate_file_name};
pub use types::{
    ExecutionReport, ModeKind, NameError, Outcome, ProgressEvent, RecordFailure, RenameFailure,
    RenameMode, RenamedRecord,
};

pub mod cli;
pub mod config;
pub mod error;
pub mod i18n;
pub mod logging;
pub mod output;
pub mod progress;
pub mod record;
pub mod rename;
pub mod scanner;
pub mod session;
pub mod state;
pub mod ui;
pub mod view;

pub use config::{config_from_env, Config, ConfigError};
pub use error::{AppError, ExitCode};
pub use i18n::Locale;
pub use record::FileRecord;
pub use rename::{
    compute_new_name, execute, ExecutionReport, FsRenamer, RenameCapability, RenameFailure,
    RenameMode,
};
pub use scanner::{import_directory, import_files, import_sources, ImportError};
pub use session::{Command, Session};
pub use state::AppState;
pub use view::{FilterState, PageView, SortField, SortState};

use clap::Parser;
use std::path::PathBuf;

use crate::i18n::Locale;
use crate::rename::ModeKind;
use crate::view::SortField;

#[derive(Parser, Debug)]
#[command(name = "prorename")]
#[command(author, version, about, long_about = None)]
#[command(about = "Batch rename files with suffix, prefix or find/replace")]
pub struct Args {
    /// A directory, or one or more files, to rename
    #[arg(required_unless_present = "interactive")]
    pub sources: Vec<PathBuf>,

    /// Rename mode
    #[arg(short, long, value_enum, default_value = "suffix")]
    pub mode: ModeKind,

    /// Text for suffix and prefix modes
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub text: String,

    /// Text to find in replace mode
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub find: String,

    /// Replacement text in replace mode
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub replace: String,

    /// Toggle an extension filter (repeatable, "no-ext" for files without one)
    #[arg(short, long = "ext", value_name = "EXT")]
    pub extensions: Vec<String>,

    /// Sort field
    #[arg(short, long, value_enum, default_value = "name")]
    pub sort: SortField,

    /// Sort descending
    #[arg(long)]
    pub desc: bool,

    /// Preview page to display
    #[arg(short, long, default_value = "1")]
    pub page: usize,

    /// Rows per preview page [default: 10, env: PRORENAME_PAGE_SIZE]
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Show the planned renames without modifying the filesystem
    #[arg(short, long)]
    pub dry: bool,

    /// Do not ask for confirmation
    #[arg(short, long)]
    pub yes: bool,

    /// Print the result as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Interface language [default: en, env: PRORENAME_LANG]
    #[arg(short, long, value_enum)]
    pub lang: Option<Locale>,

    /// Start an interactive session
    #[arg(short, long)]
    pub interactive: bool,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

//! Interactive line-command session over an [`AppState`].
//!
//! Each command maps to one user intent. After any intent that changes what
//! is visible, the current page is rendered again.

use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, info};

use crate::i18n::Locale;
use crate::output::{display_execution_result, display_facets, display_page};
use crate::rename::{execute, Outcome, RenameCapability, RenameMode};
use crate::scanner::import_sources;
use crate::state::AppState;
use crate::ui::confirm;
use crate::view::SortField;

const HELP: &str = "\
Commands:
  import <path>...          import a directory or files (\"...\" for spaces)
  show                      show the current page
  next | prev | page <n>    navigate pages
  ext <ext>                 toggle an extension filter (no-ext for none)
  exts                      list extension filters
  sort name|time            sort; repeat to flip direction
  suffix <text>             suffix mode
  prefix <text>             prefix mode
  replace <find> [<with>]   find/replace mode
  lang en|zh                switch language
  run                       rename the filtered files
  help                      show this help
  quit                      leave the session";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Import(Vec<PathBuf>),
    Show,
    Next,
    Prev,
    Page(usize),
    Ext(String),
    Exts,
    Sort(SortField),
    Mode(RenameMode),
    Lang(Locale),
    Run,
    Help,
    Quit,
}

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']).trim_start();
        let (word, rest) = match line.split_once(' ') {
            Some((word, rest)) => (word, rest),
            None => (line, ""),
        };

        match word {
            "import" => {
                let paths = split_paths(rest);
                if paths.is_empty() {
                    Err("usage: import <path>...".to_string())
                } else {
                    Ok(Command::Import(paths))
                }
            }
            "show" | "ls" => Ok(Command::Show),
            "next" | "n" => Ok(Command::Next),
            "prev" | "p" => Ok(Command::Prev),
            "page" => rest
                .trim()
                .parse()
                .map(Command::Page)
                .map_err(|_| "usage: page <number>".to_string()),
            "ext" => {
                let ext = rest.trim();
                if ext.is_empty() {
                    Err("usage: ext <extension>".to_string())
                } else {
                    Ok(Command::Ext(ext.to_string()))
                }
            }
            "exts" => Ok(Command::Exts),
            "sort" => match rest.trim() {
                "name" => Ok(Command::Sort(SortField::Name)),
                "time" => Ok(Command::Sort(SortField::Time)),
                _ => Err("usage: sort name|time".to_string()),
            },
            // Text arguments are taken verbatim so they may contain spaces
            "suffix" => Ok(Command::Mode(RenameMode::Suffix(rest.to_string()))),
            "prefix" => Ok(Command::Mode(RenameMode::Prefix(rest.to_string()))),
            "replace" => {
                let (find, replace) = rest.split_once(' ').unwrap_or((rest, ""));
                Ok(Command::Mode(RenameMode::FindReplace {
                    find: find.to_string(),
                    replace: replace.to_string(),
                }))
            }
            "lang" => rest.parse().map(Command::Lang),
            "run" => Ok(Command::Run),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            "" => Err(String::new()),
            other => Err(format!("unknown command '{}' (try 'help')", other)),
        }
    }
}

/// Split an `import` argument list into paths.
///
/// A remainder that names one existing path is taken whole, so paths with
/// spaces work unquoted. Otherwise arguments split on whitespace and double
/// quotes group a path that contains spaces.
fn split_paths(rest: &str) -> Vec<PathBuf> {
    let rest = rest.trim();
    if rest.is_empty() {
        return Vec::new();
    }
    if Path::new(rest).exists() {
        return vec![PathBuf::from(rest)];
    }

    let mut paths = Vec::new();
    let mut current = String::new();
    let mut quoted = false;

    for ch in rest.chars() {
        match ch {
            '"' => quoted = !quoted,
            c if c.is_whitespace() && !quoted => {
                if !current.is_empty() {
                    paths.push(PathBuf::from(std::mem::take(&mut current)));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        paths.push(PathBuf::from(current));
    }

    paths
}

pub struct Session<R, W, C> {
    state: AppState,
    locale: Locale,
    capability: C,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write, C: RenameCapability> Session<R, W, C> {
    pub fn new(state: AppState, locale: Locale, capability: C, input: R, output: W) -> Self {
        Self {
            state,
            locale,
            capability,
            input,
            output,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Read and handle commands until `quit` or end of input
    pub fn run(&mut self) -> io::Result<()> {
        let strings = self.locale.strings();
        writeln!(self.output, "{} (help for commands)", strings.title)?;
        self.show()?;

        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }

            match line.parse::<Command>() {
                Ok(Command::Quit) => break,
                Ok(command) => {
                    debug!(?command, "Session command");
                    self.handle(command)?;
                }
                Err(message) if message.is_empty() => {}
                Err(message) => writeln!(self.output, "{}", message)?,
            }
        }

        Ok(())
    }

    fn handle(&mut self, command: Command) -> io::Result<()> {
        match command {
            Command::Import(paths) => match import_sources(&paths) {
                Ok(records) => {
                    info!(count = records.len(), "Session import");
                    self.state.import(records);
                    self.show()?;
                }
                Err(e) => writeln!(self.output, "Import failed: {}", e)?,
            },
            Command::Show => self.show()?,
            Command::Next => {
                self.state.next_page();
                self.show()?;
            }
            Command::Prev => {
                self.state.prev_page();
                self.show()?;
            }
            Command::Page(n) => {
                self.state.go_to_page(n);
                self.show()?;
            }
            Command::Ext(ext) => {
                self.state.toggle_extension(&ext);
                self.show()?;
            }
            Command::Exts => {
                display_facets(&self.state.facets(), self.locale.strings(), &mut self.output)?
            }
            Command::Sort(field) => {
                self.state.select_sort(field);
                self.show()?;
            }
            Command::Mode(mode) => {
                writeln!(
                    self.output,
                    "{}: {}",
                    self.locale.strings().mode,
                    mode.description()
                )?;
                self.state.set_mode(mode);
                self.show()?;
            }
            Command::Lang(locale) => {
                self.locale = locale;
                self.show()?;
            }
            Command::Run => self.run_batch()?,
            Command::Help => writeln!(self.output, "{}", HELP)?,
            Command::Quit => {}
        }
        Ok(())
    }

    fn show(&mut self) -> io::Result<()> {
        display_page(&self.state.view(), self.locale.strings(), &mut self.output)
    }

    fn run_batch(&mut self) -> io::Result<()> {
        let strings = self.locale.strings();
        let snapshot = self.state.snapshot();

        if snapshot.is_empty() {
            writeln!(self.output, "{}", strings.nothing)?;
            return Ok(());
        }

        if !confirm(strings.confirm, &mut self.input, &mut self.output)? {
            writeln!(self.output, "Aborted.")?;
            return Ok(());
        }

        let output = &mut self.output;
        let mut write_error = None;
        let report = execute(&snapshot, self.state.mode(), &mut self.capability, |event| {
            if write_error.is_some() {
                return;
            }
            let status = match event.outcome {
                Outcome::Renamed => format!("-> {}", event.to),
                Outcome::Unchanged => "(unchanged)".to_string(),
                Outcome::Failed => format!("-> {} FAILED", event.to),
            };
            if let Err(e) = writeln!(
                output,
                "[{}/{} {:>3}%] {} {}",
                event.processed,
                event.total,
                event.percent(),
                event.from,
                status
            ) {
                write_error = Some(e);
            }
        });

        // State follows the disk even when progress output failed
        self.state.commit(&report);
        if let Some(e) = write_error {
            return Err(e);
        }
        display_execution_result(&report, strings, &mut self.output)?;
        self.show()
    }
}

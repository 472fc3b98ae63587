//! Progress output for a running batch.
//!
//! In verbose mode output is suppressed since tracing handles everything.
//! In normal mode one line per record is written with colors.

use colored::Colorize;
use std::io::{self, Write};

use crate::rename::{ExecutionReport, Outcome, ProgressEvent};

/// Progress reporter for user-facing output
pub struct Progress {
    writer: Box<dyn Write>,
    /// When true, all output is suppressed (verbose mode uses tracing instead)
    silent: bool,
    /// When true, output is colorized
    colors_enabled: bool,
}

impl Progress {
    /// Create a progress reporter on stderr that respects UI mode
    pub fn new_with_ui(verbose: bool, colors_enabled: bool) -> Self {
        Self {
            writer: Box::new(io::stderr()),
            silent: verbose,
            colors_enabled,
        }
    }

    /// Create a progress reporter with a custom writer
    pub fn with_writer(writer: Box<dyn Write>, colors_enabled: bool) -> Self {
        Self {
            writer,
            silent: false,
            colors_enabled,
        }
    }

    /// Report the start of a batch
    pub fn batch_start(&mut self, title: &str, total: usize, mode: &str) {
        if self.silent {
            return;
        }
        let line = format!("{}: {} files, {}", title, total, mode);
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{}", line.bold());
        } else {
            let _ = writeln!(self.writer, "{}", line);
        }
    }

    /// Report one handled record
    pub fn rename_progress(&mut self, event: &ProgressEvent<'_>) {
        if self.silent {
            return;
        }
        let counter = format!("[{}/{} {:>3}%]", event.processed, event.total, event.percent());

        if self.colors_enabled {
            let (arrow, to) = match event.outcome {
                Outcome::Renamed => ("→".cyan(), event.to.normal()),
                Outcome::Unchanged => ("=".dimmed(), "unchanged".dimmed()),
                Outcome::Failed => ("✗".red().bold(), event.to.red()),
            };
            let _ = writeln!(
                self.writer,
                "{} {} {} {}",
                counter.cyan(),
                event.from.dimmed(),
                arrow,
                to
            );
        } else {
            let to = match event.outcome {
                Outcome::Renamed => format!("-> {}", event.to),
                Outcome::Unchanged => "(unchanged)".to_string(),
                Outcome::Failed => format!("-> {} FAILED", event.to),
            };
            let _ = writeln!(self.writer, "{} {} {}", counter, event.from, to);
        }
    }

    /// Report batch completion
    pub fn batch_complete(&mut self, report: &ExecutionReport) {
        if self.silent {
            return;
        }
        let _ = writeln!(self.writer);
        if report.is_success() {
            if self.colors_enabled {
                let _ = writeln!(
                    self.writer,
                    "{} {}",
                    "✓".green().bold(),
                    format!("{} of {} files processed", report.processed, report.total).green()
                );
            } else {
                let _ = writeln!(
                    self.writer,
                    "Batch complete. {} of {} files processed.",
                    report.processed, report.total
                );
            }
        } else {
            self.warn(&format!(
                "{} of {} files failed to rename",
                report.failures.len(),
                report.total
            ));
        }
    }

    /// Report an error during operation (non-fatal)
    pub fn warn(&mut self, message: &str) {
        if self.silent {
            return;
        }
        if self.colors_enabled {
            let _ = writeln!(self.writer, "{} {}", "!".yellow().bold(), message.yellow());
        } else {
            let _ = writeln!(self.writer, "Warning: {}", message);
        }
    }
}

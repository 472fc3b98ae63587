//! UI module for styled terminal output.
//!
//! Provides colored output in normal mode and plain tracing in verbose mode.

use colored::Colorize;
use std::io::{self, BufRead, IsTerminal, Write};

/// UI configuration
#[derive(Debug, Clone)]
pub struct UiConfig {
    pub colors_enabled: bool,
    pub verbose: bool,
}

impl UiConfig {
    /// Create UI config from environment and args
    pub fn new(verbose: bool) -> Self {
        let colors_enabled = should_use_colors();
        Self {
            colors_enabled,
            verbose,
        }
    }
}

/// Check if we should use colors in output
fn should_use_colors() -> bool {
    // Check NO_COLOR env (standard: https://no-color.org/)
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }

    if std::env::var("FORCE_COLOR").is_ok() {
        return true;
    }

    io::stderr().is_terminal()
}

/// Styled output writer
pub struct Ui {
    config: UiConfig,
    writer: Box<dyn Write>,
}

impl Ui {
    /// Create a new UI with stderr output
    pub fn new(config: UiConfig) -> Self {
        Self::with_writer(config, Box::new(io::stderr()))
    }

    /// Create UI with custom writer
    pub fn with_writer(config: UiConfig, writer: Box<dyn Write>) -> Self {
        // Set colored crate's global color setting
        if !config.colors_enabled {
            colored::control::set_override(false);
        }

        Self { config, writer }
    }

    /// Print the application header
    pub fn print_header(&mut self, title: &str, version: &str) {
        let line = format!("{} v{}", title, version);
        if self.config.verbose {
            let _ = writeln!(self.writer, "{}", line);
            let _ = writeln!(self.writer);
            return;
        }

        let width = line.chars().count() + 4;
        if self.config.colors_enabled {
            let _ = writeln!(self.writer, "{}", format!("╔{}╗", "═".repeat(width)).cyan());
            let _ = writeln!(self.writer, "{}", format!("║  {}  ║", line).cyan().bold());
            let _ = writeln!(self.writer, "{}", format!("╚{}╝", "═".repeat(width)).cyan());
        } else {
            let _ = writeln!(self.writer, "╔{}╗", "═".repeat(width));
            let _ = writeln!(self.writer, "║  {}  ║", line);
            let _ = writeln!(self.writer, "╚{}╝", "═".repeat(width));
        }
        let _ = writeln!(self.writer);
    }

    /// Print a warning message
    pub fn warning(&mut self, msg: &str) {
        if self.config.verbose {
            return;
        }
        if self.config.colors_enabled {
            let _ = writeln!(self.writer, "{} {}", "!".yellow().bold(), msg.yellow());
        } else {
            let _ = writeln!(self.writer, "! {}", msg);
        }
    }

    /// Print a key-value pair
    pub fn kv(&mut self, key: &str, value: &str) {
        if self.config.verbose {
            return;
        }
        if self.config.colors_enabled {
            let _ = writeln!(self.writer, "{}: {}", key.bold(), value);
        } else {
            let _ = writeln!(self.writer, "{}: {}", key, value);
        }
    }

    /// Print a blank line
    pub fn blank(&mut self) {
        if self.config.verbose {
            return;
        }
        let _ = writeln!(self.writer);
    }

    pub fn is_verbose(&self) -> bool {
        self.config.verbose
    }

    pub fn is_colors_enabled(&self) -> bool {
        self.config.colors_enabled
    }
}

/// Ask a yes/no question; anything but an explicit yes declines
pub fn confirm(question: &str, input: &mut impl BufRead, output: &mut impl Write) -> io::Result<bool> {
    write!(output, "{} [y/N] ", question)?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        writeln!(output)?;
        return Ok(false);
    }

    let answer = answer.trim();
    Ok(answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes") || answer == "是")
}

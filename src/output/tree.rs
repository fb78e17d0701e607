//! Console tree formatter
//!
//! Renders a flat pre-order entry list with box-drawing connectors, either
//! to a plain string or to stdout with colors.

use std::io::{self, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use super::utils::{format_size, last_flags};
use super::{Entry, OutputConfig};

/// Formatter for console tree output.
pub struct TreeFormatter {
    config: OutputConfig,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self { config }
    }

    /// Connector prefix for an entry, given the is-last flags of the
    /// ancestor levels above it.
    fn level_prefix(ancestors: &[bool]) -> String {
        let mut prefix = String::new();
        for &last in ancestors {
            prefix.push_str(if last { "    " } else { "│   " });
        }
        prefix
    }

    /// Format the tree to a plain string, root label first, followed by a
    /// "N directories, M files" summary.
    pub fn format(&self, root_label: &str, entries: &[Entry]) -> String {
        let flags = last_flags(entries);
        let mut output = String::new();
        output.push_str(root_label);
        output.push('\n');

        let mut ancestors: Vec<bool> = Vec::new();
        for (entry, &is_last) in entries.iter().zip(&flags) {
            ancestors.truncate(entry.depth - 1);
            output.push_str(&Self::level_prefix(&ancestors));
            output.push_str(if is_last { "└── " } else { "├── " });
            output.push_str(&entry.name);
            if let Some(bytes) = entry.size_bytes {
                output.push_str(&format!("  [{}]", format_size(bytes)));
            }
            output.push('\n');
            ancestors.push(is_last);
        }

        let (dirs, files) = count(entries);
        output.push_str(&format!("\n{} directories, {} files\n", dirs, files));
        output
    }

    /// Print the tree to stdout, coloring directories and sizes.
    pub fn print(&self, root_label: &str, entries: &[Entry]) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Auto
        } else {
            ColorChoice::Never
        };
        let mut stdout = StandardStream::stdout(choice);

        stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
        writeln!(stdout, "{}", root_label)?;
        stdout.reset()?;

        let flags = last_flags(entries);
        let mut ancestors: Vec<bool> = Vec::new();
        for (entry, &is_last) in entries.iter().zip(&flags) {
            ancestors.truncate(entry.depth - 1);
            let connector = if is_last { "└── " } else { "├── " };
            write!(stdout, "{}{}", Self::level_prefix(&ancestors), connector)?;

            if entry.is_dir {
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Blue)).set_bold(true))?;
                write!(stdout, "{}", entry.name)?;
            } else {
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::White)))?;
                write!(stdout, "{}", entry.name)?;
            }
            stdout.reset()?;

            if let Some(bytes) = entry.size_bytes {
                write!(stdout, "  ")?;
                stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)))?;
                write!(stdout, "[{}]", format_size(bytes))?;
                stdout.reset()?;
            }
            writeln!(stdout)?;
            ancestors.push(is_last);
        }

        let (dirs, files) = count(entries);
        writeln!(stdout)?;
        writeln!(stdout, "{} directories, {} files", dirs, files)?;
        Ok(())
    }
}

fn count(entries: &[Entry]) -> (usize, usize) {
    let dirs = entries.iter().filter(|e| e.is_dir).count();
    (dirs, entries.len() - dirs)
}

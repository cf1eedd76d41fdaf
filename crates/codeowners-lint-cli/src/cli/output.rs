//! Output formatting for the CLI.
//!
//! Human-readable output mirrors the error Display impls with a colored
//! summary; JSON mode emits the serialized error array for pipeline
//! consumption.

use codeowners_lint_core::BaseError;
use colored::Colorize;
use std::io::Write;

/// Output formatter for human-readable console output.
pub struct HumanOutput<W: Write> {
    writer: W,
    use_colors: bool,
}

impl<W: Write> HumanOutput<W> {
    /// Creates a new human output formatter.
    pub fn new(writer: W, use_colors: bool) -> Self {
        Self { writer, use_colors }
    }

    /// Writes all errors followed by a summary line.
    pub fn write_errors(&mut self, errors: &[BaseError]) -> std::io::Result<()> {
        for error in errors {
            self.write_error_entry(error)?;
        }
        self.write_summary(errors.len())
    }

    fn write_error_entry(&mut self, error: &BaseError) -> std::io::Result<()> {
        let header = if error.is_block() {
            "[BLOCK]"
        } else {
            "[LINE]"
        };
        if self.use_colors {
            writeln!(self.writer, "{}", header.red().bold())?;
        } else {
            writeln!(self.writer, "{header}")?;
        }
        writeln!(self.writer, "{error}")?;
        writeln!(self.writer)
    }

    /// Writes the final valid/invalid summary.
    pub fn write_summary(&mut self, error_count: usize) -> std::io::Result<()> {
        if error_count == 0 {
            let message = "✓ CODEOWNERS file is valid";
            if self.use_colors {
                writeln!(self.writer, "{}", message.green().bold())
            } else {
                writeln!(self.writer, "{message}")
            }
        } else {
            let message = format!("✗ Found {error_count} error(s)");
            if self.use_colors {
                writeln!(self.writer, "{}", message.red().bold())
            } else {
                writeln!(self.writer, "{message}")
            }
        }
    }

    /// Writes a startup error.
    pub fn write_startup_error(&mut self, message: &str) -> std::io::Result<()> {
        if self.use_colors {
            writeln!(self.writer, "{} {}", "Error:".red().bold(), message)
        } else {
            writeln!(self.writer, "Error: {message}")
        }
    }
}

/// Writes the errors as a JSON array.
pub fn write_json<W: Write>(writer: &mut W, errors: &[BaseError]) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(errors).map_err(std::io::Error::other)?;
    writeln!(writer, "{json}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use codeowners_lint_core::{BlockFormattingError, SingleLineError};

    fn sample_errors() -> Vec<BaseError> {
        vec![
            BaseError::Block(BlockFormattingError::new(
                3,
                4,
                vec!["# ServiceLabel: %Storage".to_string(), "# AzureSdkOwners:".to_string()],
                vec!["block problem".to_string()],
            )),
            BaseError::SingleLine(SingleLineError::new(
                4,
                "# AzureSdkOwners:",
                vec!["line problem".to_string()],
            )),
        ]
    }

    #[test]
    fn human_output_without_colors() {
        let mut buf = Vec::new();
        let mut output = HumanOutput::new(&mut buf, false);
        output.write_errors(&sample_errors()).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("[BLOCK]"));
        assert!(text.contains("[LINE]"));
        assert!(text.contains("block problem"));
        assert!(text.contains("✗ Found 2 error(s)"));
    }

    #[test]
    fn human_output_valid_summary() {
        let mut buf = Vec::new();
        let mut output = HumanOutput::new(&mut buf, false);
        output.write_errors(&[]).unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("valid"));
    }

    #[test]
    fn startup_error_without_colors_has_no_ansi_codes() {
        let mut buf = Vec::new();
        let mut output = HumanOutput::new(&mut buf, false);
        output.write_startup_error("something went wrong").unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert_eq!(text, "Error: something went wrong\n");
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn json_output_is_an_array_of_tagged_errors() {
        let mut buf = Vec::new();
        write_json(&mut buf, &sample_errors()).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let array = json.as_array().unwrap();
        assert_eq!(array.len(), 2);
        assert_eq!(array[0]["kind"], "block");
        assert_eq!(array[1]["kind"], "single_line");
    }
}

//! Lint finding types.
//!
//! Recoverable findings are collected into a `Vec<BaseError>` and never abort
//! the scan. The one fatal condition, an unrecognized moniker, is its own
//! error type propagated with `?` so it can never be mistaken for a finding.

use serde::Serialize;
use std::fmt::{self, Display};
use thiserror::Error;

/// A lint finding, attributed either to a single line or to a whole block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BaseError {
    SingleLine(SingleLineError),
    Block(BlockFormattingError),
}

impl BaseError {
    /// The 1-based line number the error is reported at. For a block error
    /// this is the block's first line.
    pub fn line_number(&self) -> usize {
        match self {
            BaseError::SingleLine(e) => e.line_number,
            BaseError::Block(e) => e.start_line,
        }
    }

    /// True for block-level errors. Used to order block errors ahead of
    /// single-line errors reported at the same line.
    pub fn is_block(&self) -> bool {
        matches!(self, BaseError::Block(_))
    }

    /// The finding's messages.
    pub fn messages(&self) -> &[String] {
        match self {
            BaseError::SingleLine(e) => &e.errors,
            BaseError::Block(e) => &e.errors,
        }
    }
}

impl Display for BaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BaseError::SingleLine(e) => e.fmt(f),
            BaseError::Block(e) => e.fmt(f),
        }
    }
}

/// One or more problems found on a single CODEOWNERS line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SingleLineError {
    /// 1-based line number in the CODEOWNERS file.
    pub line_number: usize,
    /// The raw line text.
    pub line: String,
    /// The problems found on the line.
    pub errors: Vec<String>,
}

impl SingleLineError {
    pub fn new(line_number: usize, line: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            line_number,
            line: line.into(),
            errors,
        }
    }
}

impl Display for SingleLineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Error(s) on line {}", self.line_number)?;
        for error in &self.errors {
            writeln!(f, "  {error}")?;
        }
        write!(f, "Source line: {}", self.line)
    }
}

/// One or more problems with the formatting of a block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BlockFormattingError {
    /// 1-based line number of the block's first line.
    pub start_line: usize,
    /// 1-based line number of the block's last line.
    pub end_line: usize,
    /// The raw lines of the block.
    pub block_lines: Vec<String>,
    /// The problems found with the block.
    pub errors: Vec<String>,
}

impl BlockFormattingError {
    pub fn new(
        start_line: usize,
        end_line: usize,
        block_lines: Vec<String>,
        errors: Vec<String>,
    ) -> Self {
        Self {
            start_line,
            end_line,
            block_lines,
            errors,
        }
    }
}

impl Display for BlockFormattingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Error(s) in block starting on line {} and ending on line {}",
            self.start_line, self.end_line
        )?;
        for error in &self.errors {
            writeln!(f, "  {error}")?;
        }
        writeln!(f, "Block text:")?;
        let mut lines = self.block_lines.iter().peekable();
        while let Some(line) = lines.next() {
            if lines.peek().is_some() {
                writeln!(f, "{line}")?;
            } else {
                write!(f, "{line}")?;
            }
        }
        Ok(())
    }
}

/// A moniker-shaped line that matches no known moniker.
///
/// Unlike every other finding this aborts the lint: an unrecognized moniker
/// means the file and the moniker table have diverged, and continuing would
/// verify the block against the wrong rules.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognized moniker '{keyword}' on line {line_number}")]
pub struct UnknownMonikerError {
    /// 1-based line number of the offending line.
    pub line_number: usize,
    /// The unrecognized keyword as it appeared in the file.
    pub keyword: String,
}

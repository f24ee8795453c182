//! # Bulk Sheet Parsing
//!
//! The bulk input is a header-less comma-separated file, one site per line:
//!
//! ```text
//! 10304,US,2
//! 267,CA,6
//! ```
//!
//! Each line is trimmed as a whole before splitting; whitespace next to a comma is
//! part of the field and makes it invalid. A bad line never aborts the sheet, it
//! becomes a [`RowError`] next to the good rows.

use thiserror::Error;

use crate::site::{Country, Site, SiteId};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RowError {
    #[error("line {line}: expected 3 fields, found {found}")]
    FieldCount { line: usize, found: usize },
    #[error("line {line}: invalid site id '{value}'")]
    SiteId { line: usize, value: String },
    #[error("line {line}: unrecognized country '{value}'")]
    Country { line: usize, value: String },
    #[error("line {line}: invalid register count '{value}'")]
    RegisterCount { line: usize, value: String },
}

impl RowError {
    pub fn line(&self) -> usize {
        match self {
            Self::FieldCount { line, .. }
            | Self::SiteId { line, .. }
            | Self::Country { line, .. }
            | Self::RegisterCount { line, .. } => *line,
        }
    }
}

/// Result of parsing one non-blank line.
pub type RowOutcome = Result<Site, RowError>;

/// Parses a single line. Blank lines yield `None`.
///
/// `line` is the 1-based line number used in error messages.
pub fn parse_row(line: usize, raw: &str) -> Option<RowOutcome> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let fields: Vec<&str> = trimmed.split(',').collect();
    let [id, country, registers] = fields.as_slice() else {
        return Some(Err(RowError::FieldCount {
            line,
            found: fields.len(),
        }));
    };

    Some(parse_fields(line, id, country, registers))
}

fn parse_fields(line: usize, id: &str, country: &str, registers: &str) -> RowOutcome {
    let id: SiteId = id.parse().map_err(|_| RowError::SiteId {
        line,
        value: id.to_string(),
    })?;

    let country: Country = country.parse().map_err(|_| RowError::Country {
        line,
        value: country.to_string(),
    })?;

    let registers: u32 = parse_count(registers).ok_or_else(|| RowError::RegisterCount {
        line,
        value: registers.to_string(),
    })?;

    Ok(Site::new(id, country, registers))
}

fn parse_count(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Parses a whole sheet in file order, skipping blank lines.
pub fn parse_sheet(text: &str) -> Vec<RowOutcome> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    text.lines()
        .enumerate()
        .filter_map(|(idx, raw)| parse_row(idx + 1, raw))
        .collect()
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Statement file kind, detected from the filename extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatementKind {
    Csv,
    Pdf,
    Unsupported,
}

impl StatementKind {
    /// Detect the kind from a path's extension, case-insensitive.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => StatementKind::Csv,
            Some(ext) if ext.eq_ignore_ascii_case("pdf") => StatementKind::Pdf,
            _ => StatementKind::Unsupported,
        }
    }
}

/// One candidate row straight out of an extractor. Fields are untrusted
/// strings; the cleaner decides whether the row survives.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRecord {
    pub date: String,
    pub description: String,
    pub amount: String,
}

/// Normalized output of the cleaner (format-agnostic)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatementRow {
    pub date: NaiveDate,
    pub description: String,
    /// Negative means expense; positive means income/credit.
    pub amount: f64,
}

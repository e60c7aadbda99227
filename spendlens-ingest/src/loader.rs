//! Statement loading: detect the file kind, extract candidates, clean them.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::clean::clean_records;
use crate::parsers::{csv_table, pdf_lines};
use crate::types::{StatementKind, StatementRow};

/// Run the extract→clean pipeline for one statement file.
///
/// An unsupported extension produces an empty row set rather than an
/// error, and so does a PDF without a usable text layer. Only failing to
/// read the file at all is surfaced to the caller.
pub fn load_statement(path: &Path) -> Result<Vec<StatementRow>> {
    let candidates = match StatementKind::from_path(path) {
        StatementKind::Csv => {
            let text =
                fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
            csv_table::extract(&text)
        }
        StatementKind::Pdf => {
            let bytes = fs::read(path).with_context(|| format!("reading {}", path.display()))?;
            match pdf_extract::extract_text_from_mem(&bytes) {
                Ok(text) => pdf_lines::extract(&text),
                Err(err) => {
                    warn!("no text layer extracted from {}: {err}", path.display());
                    Vec::new()
                }
            }
        }
        StatementKind::Unsupported => {
            debug!("unsupported statement extension: {}", path.display());
            Vec::new()
        }
    };

    let rows = clean_records(candidates);
    debug!("{}: {} cleaned rows", path.display(), rows.len());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_csv_statement() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stmt.csv");
        fs::write(
            &path,
            "Date,Description,Amount\n\
             2024-01-05,STARBUCKS COFFEE #123,-4.75\n\
             2024-01-06,NOT A NUMBER,abc\n\
             2024-01-07,PAYROLL ACME INC,1250.00\n",
        )
        .unwrap();

        let rows = load_statement(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].amount, -4.75);
        assert_eq!(rows[1].description, "PAYROLL ACME INC");
    }

    #[test]
    fn test_unsupported_extension_is_empty_not_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stmt.xlsx");
        fs::write(&path, "whatever").unwrap();
        let rows = load_statement(&path).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.csv");
        assert!(load_statement(&path).is_err());
    }

    #[test]
    fn test_garbage_pdf_bytes_yield_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stmt.pdf");
        fs::write(&path, b"not a pdf at all").unwrap();
        let rows = load_statement(&path).unwrap();
        assert!(rows.is_empty());
    }
}

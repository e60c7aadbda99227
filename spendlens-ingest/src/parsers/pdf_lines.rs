//! Heuristic extractor for PDF statement text.
//!
//! Expected text rows after PDF-to-text:
//!   01/02/2024 AMAZON MKTPLACE $45.00
//!   01/05/2024 ZELLE TO J SMITH -120.00
//!
//! Each line is tokenized on whitespace: first token is the date, last
//! token is the amount (`$` and `,` stripped), everything between joins
//! into the description. Lines with fewer than 3 tokens are skipped.
//! Statements with multi-line descriptions or non-whitespace-delimited
//! columns will misparse; those rows fall out at the cleaner.

use crate::types::RawRecord;

/// Extract candidate records from PDF-extracted text.
pub fn extract(text: &str) -> Vec<RawRecord> {
    let mut out = Vec::new();
    for line in text.lines() {
        let parts: Vec<&str> = line.split_whitespace().collect();
        if parts.len() < 3 {
            continue;
        }
        out.push(RawRecord {
            date: parts[0].to_string(),
            description: parts[1..parts.len() - 1].join(" "),
            amount: parts[parts.len() - 1].replace(['$', ','], ""),
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_basic_rows() {
        let text = "\
01/02/2024 AMAZON MKTPLACE $45.00
01/05/2024 ZELLE TO J SMITH -120.00
";
        let recs = extract(text);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].date, "01/02/2024");
        assert_eq!(recs[0].description, "AMAZON MKTPLACE");
        assert_eq!(recs[0].amount, "45.00");
        assert_eq!(recs[1].description, "ZELLE TO J SMITH");
        assert_eq!(recs[1].amount, "-120.00");
    }

    #[test]
    fn test_strips_dollar_and_thousands_separators() {
        let recs = extract("01/31/2024 WIRE IN $1,250.00");
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].amount, "1250.00");
    }

    #[test]
    fn test_skips_lines_with_fewer_than_three_tokens() {
        let text = "\
TRANSACTION DETAIL
Page 2
01/02/2024 COMCAST -79.99
";
        let recs = extract(text);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].description, "COMCAST");
    }

    #[test]
    fn test_collapses_runs_of_whitespace_in_description() {
        let recs = extract("01/02/2024   TRADER   JOE'S    #552   -34.20");
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].description, "TRADER JOE'S #552");
    }

    #[test]
    fn test_header_lines_become_junk_candidates() {
        // Header rows with 3+ tokens are still accepted here; their date
        // and amount fail coercion and the cleaner drops them.
        let recs = extract("DATE DESCRIPTION AMOUNT");
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].date, "DATE");
        assert_eq!(recs[0].amount, "AMOUNT");
    }
}

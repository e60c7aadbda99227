//! CSV statement extractor.
//!
//! Expects a header row naming `Date`, `Description`, and `Amount` columns;
//! extra columns are ignored. A missing header or missing required column
//! yields zero candidates.

use tracing::debug;

use crate::types::RawRecord;

/// Extract candidate records from CSV text.
pub fn extract(text: &str) -> Vec<RawRecord> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = match rdr.headers() {
        Ok(h) => h.clone(),
        Err(_) => return Vec::new(),
    };
    let find = |name: &str| headers.iter().position(|h| h.trim() == name);
    let (Some(idx_date), Some(idx_desc), Some(idx_amount)) =
        (find("Date"), find("Description"), find("Amount"))
    else {
        debug!("csv header is missing a Date/Description/Amount column");
        return Vec::new();
    };

    let mut out = Vec::new();
    for result in rdr.records() {
        let Ok(record) = result else { continue };
        let field = |i: usize| record.get(i).unwrap_or("").trim().to_string();
        out.push(RawRecord {
            date: field(idx_date),
            description: field(idx_desc),
            amount: field(idx_amount),
        });
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_rows_by_header_name() {
        let text = "\
Date,Description,Amount
2024-01-05,STARBUCKS COFFEE #123,-4.75
2024-01-06,PAYROLL ACME INC,1250.00
";
        let recs = extract(text);
        assert_eq!(recs.len(), 2);
        assert_eq!(recs[0].date, "2024-01-05");
        assert_eq!(recs[0].description, "STARBUCKS COFFEE #123");
        assert_eq!(recs[0].amount, "-4.75");
    }

    #[test]
    fn test_extra_columns_ignored_and_order_free() {
        let text = "\
Account,Amount,Description,Date,Running Bal.
1234,-15.00,NETFLIX,2024-02-01,985.00
";
        let recs = extract(text);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].date, "2024-02-01");
        assert_eq!(recs[0].description, "NETFLIX");
        assert_eq!(recs[0].amount, "-15.00");
    }

    #[test]
    fn test_missing_required_column_yields_nothing() {
        let text = "\
Date,Payee,Amount
2024-01-05,STARBUCKS,-4.75
";
        assert!(extract(text).is_empty());
    }

    #[test]
    fn test_non_numeric_amounts_still_candidates() {
        // The extractor does not judge field contents; the cleaner does.
        let text = "\
Date,Description,Amount
2024-01-05,MYSTERY,not-a-number
";
        let recs = extract(text);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].amount, "not-a-number");
    }

    #[test]
    fn test_short_rows_produce_empty_fields() {
        let text = "\
Date,Description,Amount
2024-01-05,ONLY-TWO-FIELDS
";
        let recs = extract(text);
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].amount, "");
    }
}

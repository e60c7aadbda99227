//! Field coercion for candidate records.
//!
//! A row survives only if both its amount and its date parse; everything
//! else is dropped. No range checks, no duplicate detection.

use chrono::NaiveDate;
use tracing::debug;

use crate::types::{RawRecord, StatementRow};

/// Date formats accepted by the cleaner, tried in order. `%m/%d/%y` comes
/// before `%m/%d/%Y`: chrono's `%Y` would accept "1/5/24" as year 24,
/// while `%y` fails cleanly on four-digit years (trailing input).
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%y", "%m/%d/%Y", "%Y/%m/%d"];

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok())
}

pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}

/// Coerce candidates into typed rows, dropping any row whose date or
/// amount fails to parse.
pub fn clean_records(records: Vec<RawRecord>) -> Vec<StatementRow> {
    let mut rows = Vec::with_capacity(records.len());
    for rec in records {
        let (Some(date), Some(amount)) = (parse_date(&rec.date), parse_amount(&rec.amount)) else {
            debug!(date = %rec.date, amount = %rec.amount, "dropping unparseable row");
            continue;
        };
        rows.push(StatementRow {
            date,
            description: rec.description,
            amount,
        });
    }
    rows
}

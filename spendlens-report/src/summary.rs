//! Categorized record assembly and expense aggregation.

use std::collections::HashMap;

use serde::Serialize;
use spendlens_core::{Category, Transaction, categorize};
use spendlens_ingest::StatementRow;

/// Attach a category to every cleaned row, in input order.
pub fn to_transactions(rows: &[StatementRow]) -> Vec<Transaction> {
    rows.iter()
        .map(|row| {
            Transaction::new(
                row.date,
                row.description.clone(),
                row.amount,
                categorize(&row.description),
            )
        })
        .collect()
}

/// One category's share of total expense spending
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySlice {
    pub category: Category,
    /// Absolute sum of this category's expense amounts
    pub total: f64,
    /// Share of all expenses, in percent (0..=100)
    pub share_pct: f64,
}

/// Per-category distribution of expense (negative-amount) records
#[derive(Debug, Clone, Default, Serialize)]
pub struct SpendingSummary {
    /// Slices in fixed category-table order; categories with no expenses
    /// are omitted.
    pub slices: Vec<CategorySlice>,
    /// Grand total of absolute expense amounts
    pub total: f64,
}

impl SpendingSummary {
    /// Filter to expenses and sum absolute amounts per category.
    ///
    /// Income-only (or empty) input yields an empty summary, which in turn
    /// suppresses the chart.
    pub fn from_transactions(txns: &[Transaction]) -> Self {
        let mut totals: HashMap<Category, f64> = HashMap::new();
        for t in txns.iter().filter(|t| t.is_expense()) {
            *totals.entry(t.category).or_insert(0.0) += t.abs_amount();
        }
        let total: f64 = totals.values().sum();

        let slices = Category::ALL
            .iter()
            .filter_map(|c| {
                totals.get(c).map(|&sum| CategorySlice {
                    category: *c,
                    total: sum,
                    share_pct: if total > 0.0 {
                        sum / total * 100.0
                    } else {
                        0.0
                    },
                })
            })
            .collect();

        Self { slices, total }
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn txn(desc: &str, amount: f64) -> Transaction {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        Transaction::new(date, desc, amount, categorize(desc))
    }

    #[test]
    fn test_to_transactions_preserves_rows() {
        let rows = vec![
            StatementRow {
                date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
                description: "STARBUCKS COFFEE #123".to_string(),
                amount: -4.75,
            },
            StatementRow {
                date: NaiveDate::from_ymd_opt(2024, 1, 6).unwrap(),
                description: "MYSTERY VENDOR".to_string(),
                amount: 20.0,
            },
        ];
        let txns = to_transactions(&rows);
        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0].category, Category::Dining);
        assert_eq!(txns[0].amount, -4.75);
        assert_eq!(txns[1].category, Category::Uncategorized);
    }

    #[test]
    fn test_summary_sums_absolute_expenses_per_category() {
        let txns = vec![
            txn("STARBUCKS #1", -4.0),
            txn("CAFE LUNA", -6.0),
            txn("COMCAST INTERNET", -90.0),
            txn("PAYROLL DEPOSIT", 2000.0),
        ];
        let summary = SpendingSummary::from_transactions(&txns);
        assert_eq!(summary.total, 100.0);
        assert_eq!(summary.slices.len(), 2);
        // Fixed table order: Dining before Utilities.
        assert_eq!(summary.slices[0].category, Category::Dining);
        assert_eq!(summary.slices[0].total, 10.0);
        assert_eq!(summary.slices[0].share_pct, 10.0);
        assert_eq!(summary.slices[1].category, Category::Utilities);
        assert_eq!(summary.slices[1].share_pct, 90.0);
    }

    #[test]
    fn test_shares_sum_to_one_hundred() {
        let txns = vec![
            txn("RENT MARCH", -1700.0),
            txn("TRADER JOE'S", -84.37),
            txn("ZELLE OUT", -250.0),
        ];
        let summary = SpendingSummary::from_transactions(&txns);
        let sum: f64 = summary.slices.iter().map(|s| s.share_pct).sum();
        assert!((sum - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_income_only_is_empty() {
        let txns = vec![txn("PAYROLL", 2000.0), txn("REFUND", 15.0)];
        let summary = SpendingSummary::from_transactions(&txns);
        assert!(summary.is_empty());
        assert_eq!(summary.total, 0.0);
    }

    #[test]
    fn test_zero_amounts_are_not_expenses() {
        let txns = vec![txn("VOID ENTRY", 0.0)];
        assert!(SpendingSummary::from_transactions(&txns).is_empty());
    }
}

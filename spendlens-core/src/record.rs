//! Transaction record type shared across the pipeline.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::category::Category;

/// One statement transaction, fully cleaned and categorized.
///
/// Every field is populated: rows whose date or amount fail coercion never
/// become a `Transaction`, and `category` always holds exactly one label
/// from the fixed table (or `Uncategorized`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transaction {
    /// Date of the transaction
    pub date: NaiveDate,
    /// Description as it appeared on the statement
    pub description: String,
    /// Positive = income/credit, negative = expense
    pub amount: f64,
    /// Deterministic category from the keyword table
    pub category: Category,
}

impl Transaction {
    /// Create a new Transaction
    pub fn new(
        date: NaiveDate,
        description: impl Into<String>,
        amount: f64,
        category: Category,
    ) -> Self {
        Self {
            date,
            description: description.into(),
            amount,
            category,
        }
    }

    /// Returns true if this is an expense (negative amount)
    pub fn is_expense(&self) -> bool {
        self.amount < 0.0
    }

    /// Returns true if this is income (positive amount)
    pub fn is_income(&self) -> bool {
        self.amount > 0.0
    }

    /// Get the absolute amount
    pub fn abs_amount(&self) -> f64 {
        self.amount.abs()
    }
}

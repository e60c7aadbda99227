//! Fixed category label set and the keyword table that drives categorization.
//!
//! The table is a prioritized rule list: categories are checked in table
//! order and the first one with any keyword contained in the lowercased
//! description wins. No tie-break beyond table order.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Spending categories assigned deterministically from description keywords
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    #[serde(rename = "fees")]
    Fees,
    #[serde(rename = "transfer")]
    Transfer,
    #[serde(rename = "dining")]
    Dining,
    #[serde(rename = "groceries")]
    Groceries,
    #[serde(rename = "rent")]
    Rent,
    #[serde(rename = "college-tuition")]
    CollegeTuition,
    #[serde(rename = "credit-card")]
    CreditCard,
    #[serde(rename = "utilities")]
    Utilities,
    #[serde(rename = "shopping")]
    Shopping,
    #[serde(rename = "uncategorized")]
    Uncategorized,
}

impl Category {
    /// Every category in table order, `Uncategorized` last.
    pub const ALL: [Category; 10] = [
        Category::Fees,
        Category::Transfer,
        Category::Dining,
        Category::Groceries,
        Category::Rent,
        Category::CollegeTuition,
        Category::CreditCard,
        Category::Utilities,
        Category::Shopping,
        Category::Uncategorized,
    ];

    /// Human-readable label used in tables and chart legends
    pub fn label(&self) -> &'static str {
        match self {
            Category::Fees => "Fees",
            Category::Transfer => "Transfer",
            Category::Dining => "Dining",
            Category::Groceries => "Groceries",
            Category::Rent => "Rent",
            Category::CollegeTuition => "College Tuition",
            Category::CreditCard => "Credit Card",
            Category::Utilities => "Utilities",
            Category::Shopping => "Shopping",
            Category::Uncategorized => "Uncategorized",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Keyword table, order-significant. All keywords are lowercase; matching is
/// substring containment on the lowercased description.
pub const CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (Category::Fees, &["fee", "charge", "maintenance"]),
    (
        Category::Transfer,
        &["wire", "transfer", "zelle", "venmo", "paypal"],
    ),
    (
        Category::Dining,
        &["restaurant", "cafe", "starbucks", "coffee"],
    ),
    (
        Category::Groceries,
        &["grocery", "walmart", "trader", "whole", "amazon"],
    ),
    (Category::Rent, &["rent", "lease", "apartment", "commons"]),
    (
        Category::CollegeTuition,
        &["tuition", "college", "university", "uni", "school"],
    ),
    (Category::CreditCard, &["crd"]),
    (
        Category::Utilities,
        &["electric", "water", "gas", "pge", "comcast"],
    ),
    (Category::Shopping, &["purchase", "store", "mall"]),
];

/// Deterministically categorize a statement description.
///
/// First category in `CATEGORY_KEYWORDS` with a matching keyword wins;
/// descriptions matching nothing fall back to `Uncategorized`.
pub fn categorize(description: &str) -> Category {
    let desc = description.to_lowercase();
    for (category, keywords) in CATEGORY_KEYWORDS {
        if keywords.iter().any(|kw| desc.contains(kw)) {
            return *category;
        }
    }
    Category::Uncategorized
}

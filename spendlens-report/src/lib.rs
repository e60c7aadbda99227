//! spendlens-report: categorized record assembly, expense summaries, and
//! pie-chart rendering.

pub mod chart;
pub mod summary;

pub use chart::{ChartOptions, spending_pie};
pub use summary::{CategorySlice, SpendingSummary, to_transactions};

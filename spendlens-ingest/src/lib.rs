//! spendlens-ingest: statement loading (CSV/PDF text), extraction heuristics,
//! and field cleaning.

pub mod clean;
pub mod loader;
pub mod parsers;
pub mod types;

pub use loader::load_statement;
pub use types::{RawRecord, StatementKind, StatementRow};

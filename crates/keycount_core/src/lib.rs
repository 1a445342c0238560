//! Keycount core: the sorted keyword table, exact-match lookup, and the
//! summary view rendered after a scan.
mod summary;
mod table;

pub use summary::{summarize, SummaryLine};
pub use table::{KeywordEntry, KeywordTable};

//! Ledger domain: the category taxonomy, records, and the running ledger.

#[allow(clippy::module_inception)]
pub mod ledger;
pub mod record;
pub mod taxonomy;

pub use ledger::{FindReport, Ledger, Snapshot};
pub use record::{parse_amount, parse_balance, Record};
pub use taxonomy::{CategoryLine, CategoryNode, Render, Taxonomy};

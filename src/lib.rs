#![doc(test(attr(deny(warnings))))]

//! Pocket Ledger keeps a personal income/expense ledger whose records are
//! tagged with categories from a fixed hierarchy, with totals per category
//! subtree and a plain-text save file.
//!
//! ```
//! use pocket_ledger::ledger::{Ledger, Taxonomy};
//!
//! let taxonomy = Taxonomy::reference();
//! let mut ledger = Ledger::new(100);
//! ledger.add("food", "meal", -50, &taxonomy).unwrap();
//! ledger.add("bus", "fare", -10, &taxonomy).unwrap();
//!
//! let report = ledger.find("expense", &taxonomy).unwrap();
//! assert_eq!(report.total, -60);
//! assert_eq!(ledger.balance(), 40);
//! ```

pub mod cli;
pub mod config;
pub mod errors;
pub mod ledger;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup debug log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::debug!("Pocket Ledger tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
        super::init();
    }
}

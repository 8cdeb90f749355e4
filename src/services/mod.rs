//! Service layer for Splitmate
//!
//! Pure ledger arithmetic (splits, reconciliation) plus thin services that
//! run it over the storage layer.

pub mod ledger;
pub mod split;

pub use ledger::{reconcile, LedgerService};
pub use split::{compute_owed, SplitShares};

//! Derived balance between the two parties
//!
//! A balance is never stored. It is recomputed from the full expense and
//! settlement history on every read, so there is no cached figure that can
//! drift from the ledger.

use serde::{Deserialize, Serialize};

use super::money::Money;
use super::party::Party;

/// Net position between the two parties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Balance {
    /// Positive means Party B owes Party A; negative means the reverse
    pub net: Money,

    /// Total Party A has paid across all expenses
    pub party_a_total_paid: Money,

    /// Total Party B has paid across all expenses
    pub party_b_total_paid: Money,
}

impl Balance {
    /// True when neither party owes the other
    pub fn is_settled(&self) -> bool {
        self.net.is_zero()
    }

    /// The party currently in debt, if any
    pub fn debtor(&self) -> Option<Party> {
        if self.net.is_positive() {
            Some(Party::PartyB)
        } else if self.net.is_negative() {
            Some(Party::PartyA)
        } else {
            None
        }
    }

    /// How much the debtor owes (zero when settled)
    pub fn amount_owed(&self) -> Money {
        self.net.abs()
    }
}

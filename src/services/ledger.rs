//! Balance reconciliation
//!
//! Folds the full expense and settlement history into a net balance. The
//! fold is stateless and recomputed from scratch on every call, so there is
//! no cached balance that can desynchronize from the ledger.

use crate::error::SplitmateResult;
use crate::models::{Balance, Expense, Money, Party, Settlement};
use crate::storage::Storage;

use super::split::compute_owed;

/// Derive the net balance from expense and settlement history
///
/// For each expense, the non-payer's share accrues as owed; the payer's own
/// share is implicitly covered by having paid. Settlements then reduce the
/// payer's outstanding debt, clamped at zero: overpayment is absorbed, not
/// carried forward as credit. Positive net means Party B owes Party A.
pub fn reconcile(expenses: &[Expense], settlements: &[Settlement]) -> Balance {
    let mut party_a_paid = Money::zero();
    let mut party_b_paid = Money::zero();
    let mut party_a_owes = Money::zero();
    let mut party_b_owes = Money::zero();

    for expense in expenses {
        let shares = compute_owed(expense);
        match expense.paid_by {
            Party::PartyA => {
                party_a_paid += expense.amount;
                party_b_owes += shares.party_b_owes;
            }
            Party::PartyB => {
                party_b_paid += expense.amount;
                party_a_owes += shares.party_a_owes;
            }
        }
    }

    for settlement in settlements {
        match settlement.paid_by {
            Party::PartyA => {
                party_a_owes = (party_a_owes - settlement.amount).clamp_at_zero();
            }
            Party::PartyB => {
                party_b_owes = (party_b_owes - settlement.amount).clamp_at_zero();
            }
        }
    }

    Balance {
        net: party_b_owes - party_a_owes,
        party_a_total_paid: party_a_paid,
        party_b_total_paid: party_b_paid,
    }
}

/// Service deriving balances from the storage layer
pub struct LedgerService<'a> {
    storage: &'a Storage,
}

impl<'a> LedgerService<'a> {
    /// Create a new ledger service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Recompute the balance from the full stored history
    pub fn balance(&self) -> SplitmateResult<Balance> {
        let expenses = self.storage.expenses.get_all()?;
        let settlements = self.storage.settlements.get_all()?;
        Ok(reconcile(&expenses, &settlements))
    }
}

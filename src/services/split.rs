//! Split calculation
//!
//! Computes each party's owed share of an expense. Pure and deterministic:
//! malformed shares are the ingestion pipeline's problem, this function
//! trusts its input.

use crate::models::{Expense, Money, Party, SplitType};

/// Each party's owed share of a single expense
///
/// Shares are non-negative and always sum exactly to the expense amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SplitShares {
    pub party_a_owes: Money,
    pub party_b_owes: Money,
}

/// Compute what each party owes for an expense
///
/// - `Equal`: halve the amount; the odd leftover cent goes to whichever
///   party did not pay, so the payer never under-collects by a fraction.
/// - `Percentage`: Party A's share is rounded once; Party B gets the exact
///   remainder, never an independently rounded figure, so the sum invariant
///   holds exactly.
/// - `Exact`: shares are already minor units and pass through.
pub fn compute_owed(expense: &Expense) -> SplitShares {
    let amount = expense.amount.cents();

    match expense.split_type {
        SplitType::Equal => {
            let half = amount / 2;
            let remainder = amount % 2;
            match expense.paid_by {
                Party::PartyA => SplitShares {
                    party_a_owes: Money::from_cents(half),
                    party_b_owes: Money::from_cents(half + remainder),
                },
                Party::PartyB => SplitShares {
                    party_a_owes: Money::from_cents(half + remainder),
                    party_b_owes: Money::from_cents(half),
                },
            }
        }
        SplitType::Percentage => {
            let party_a = ((amount as f64) * (expense.party_a_share as f64) / 100.0).round() as i64;
            SplitShares {
                party_a_owes: Money::from_cents(party_a),
                party_b_owes: Money::from_cents(amount - party_a),
            }
        }
        SplitType::Exact => SplitShares {
            party_a_owes: Money::from_cents(expense.party_a_share),
            party_b_owes: Money::from_cents(expense.party_b_share),
        },
    }
}

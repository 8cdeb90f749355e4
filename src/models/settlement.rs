//! Settlement model
//!
//! A settlement records a real-world transfer between the two parties that
//! reduces an outstanding balance. The recipient is always the counterparty
//! of the payer.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::SettlementId;
use super::money::Money;
use super::party::Party;

/// A recorded payment from one party to the other
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settlement {
    /// Unique identifier
    pub id: SettlementId,

    /// Amount transferred (always positive)
    pub amount: Money,

    /// Who sent the money
    pub paid_by: Party,

    /// Who received it (always the counterparty of `paid_by`)
    pub paid_to: Party,

    /// Transfer date
    pub date: NaiveDate,

    /// Free-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// When the settlement was recorded
    pub created_at: DateTime<Utc>,
}

impl Settlement {
    /// Create a new settlement; the recipient is derived from the payer
    pub fn new(amount: Money, paid_by: Party, date: NaiveDate, note: Option<String>) -> Self {
        Self {
            id: SettlementId::new(),
            amount,
            paid_by,
            paid_to: paid_by.other(),
            date,
            note,
            created_at: Utc::now(),
        }
    }

    /// Validate the settlement
    pub fn validate(&self) -> Result<(), SettlementValidationError> {
        if !self.amount.is_positive() {
            return Err(SettlementValidationError::NonPositiveAmount(
                self.amount.cents(),
            ));
        }

        if self.paid_to == self.paid_by {
            return Err(SettlementValidationError::SelfPayment(self.paid_by));
        }

        Ok(())
    }
}

/// Validation errors for settlements
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SettlementValidationError {
    NonPositiveAmount(i64),
    SelfPayment(Party),
}

impl fmt::Display for SettlementValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveAmount(cents) => {
                write!(f, "Settlement amount must be positive (got {} cents)", cents)
            }
            Self::SelfPayment(party) => {
                write!(f, "{} cannot settle with themselves", party)
            }
        }
    }
}

impl std::error::Error for SettlementValidationError {}

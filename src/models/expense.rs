//! Expense model
//!
//! A shared expense paid by one party and split between both according to a
//! split policy. Share fields are interpreted by the split type: percentage
//! points for `Percentage`, minor units for `Exact`, ignored for `Equal`.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::category::Category;
use super::ids::ExpenseId;
use super::money::Money;
use super::party::Party;

/// Policy governing how an expense is divided between the two parties
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SplitType {
    /// Both parties owe half; the odd cent goes to the non-payer
    #[default]
    Equal,
    /// Shares are percentage points summing to 100
    Percentage,
    /// Shares are minor-unit amounts summing to the expense amount
    Exact,
}

impl fmt::Display for SplitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Equal => write!(f, "Equal"),
            Self::Percentage => write!(f, "Percentage"),
            Self::Exact => write!(f, "Exact"),
        }
    }
}

/// A shared expense
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    /// Unique identifier
    pub id: ExpenseId,

    /// What the money was spent on
    pub description: String,

    /// Total amount paid (always positive)
    pub amount: Money,

    /// Who paid
    pub paid_by: Party,

    /// How the cost is divided
    #[serde(default)]
    pub split_type: SplitType,

    /// Party A's share (interpretation depends on split_type)
    #[serde(default)]
    pub party_a_share: i64,

    /// Party B's share (interpretation depends on split_type)
    #[serde(default)]
    pub party_b_share: i64,

    /// Expense category
    #[serde(default)]
    pub category: Category,

    /// Purchase date
    pub date: NaiveDate,

    /// Free-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,

    /// When the expense was recorded
    pub created_at: DateTime<Utc>,
}

/// Input for creating a new expense
///
/// This is the draft shape produced by manual entry, CSV row validation, and
/// receipt-scan apply. The store assigns the id and creation timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateExpenseInput {
    pub description: String,
    pub amount: Money,
    pub paid_by: Party,
    pub split_type: SplitType,
    pub party_a_share: i64,
    pub party_b_share: i64,
    pub category: Category,
    pub date: NaiveDate,
    pub note: Option<String>,
}

impl CreateExpenseInput {
    /// An equal 50/50 split, the default for imported rows
    pub fn equal_split(
        description: impl Into<String>,
        amount: Money,
        paid_by: Party,
        category: Category,
        date: NaiveDate,
        note: Option<String>,
    ) -> Self {
        Self {
            description: description.into(),
            amount,
            paid_by,
            split_type: SplitType::Equal,
            party_a_share: 50,
            party_b_share: 50,
            category,
            date,
            note,
        }
    }

    /// Validate the draft against the split invariants
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        if self.description.trim().is_empty() {
            return Err(ExpenseValidationError::EmptyDescription);
        }

        if !self.amount.is_positive() {
            return Err(ExpenseValidationError::NonPositiveAmount(
                self.amount.cents(),
            ));
        }

        match self.split_type {
            SplitType::Equal => {}
            SplitType::Percentage => {
                if self.party_a_share + self.party_b_share != 100 {
                    return Err(ExpenseValidationError::PercentageSharesInvalid {
                        party_a: self.party_a_share,
                        party_b: self.party_b_share,
                    });
                }
            }
            SplitType::Exact => {
                if self.party_a_share + self.party_b_share != self.amount.cents() {
                    return Err(ExpenseValidationError::ExactSharesInvalid {
                        expected: self.amount.cents(),
                        actual: self.party_a_share + self.party_b_share,
                    });
                }
            }
        }

        Ok(())
    }
}

impl Expense {
    /// Materialize an expense from a validated draft
    pub fn from_input(input: CreateExpenseInput) -> Self {
        Self {
            id: ExpenseId::new(),
            description: input.description,
            amount: input.amount,
            paid_by: input.paid_by,
            split_type: input.split_type,
            party_a_share: input.party_a_share,
            party_b_share: input.party_b_share,
            category: input.category,
            date: input.date,
            note: input.note,
            created_at: Utc::now(),
        }
    }

    /// Validate the stored expense (same invariants as the draft)
    pub fn validate(&self) -> Result<(), ExpenseValidationError> {
        self.as_input().validate()
    }

    /// View the expense as a draft (for re-validation)
    fn as_input(&self) -> CreateExpenseInput {
        CreateExpenseInput {
            description: self.description.clone(),
            amount: self.amount,
            paid_by: self.paid_by,
            split_type: self.split_type,
            party_a_share: self.party_a_share,
            party_b_share: self.party_b_share,
            category: self.category,
            date: self.date,
            note: self.note.clone(),
        }
    }
}

/// Validation errors for expenses
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExpenseValidationError {
    EmptyDescription,
    NonPositiveAmount(i64),
    PercentageSharesInvalid { party_a: i64, party_b: i64 },
    ExactSharesInvalid { expected: i64, actual: i64 },
}

impl fmt::Display for ExpenseValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyDescription => write!(f, "Description cannot be empty"),
            Self::NonPositiveAmount(cents) => {
                write!(f, "Amount must be positive (got {} cents)", cents)
            }
            Self::PercentageSharesInvalid { party_a, party_b } => write!(
                f,
                "Percentage shares must sum to 100 (got {} + {})",
                party_a, party_b
            ),
            Self::ExactSharesInvalid { expected, actual } => write!(
                f,
                "Exact shares must sum to the amount ({} cents, got {})",
                expected, actual
            ),
        }
    }
}

impl std::error::Error for ExpenseValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(split_type: SplitType, a: i64, b: i64) -> CreateExpenseInput {
        CreateExpenseInput {
            description: "Dinner".into(),
            amount: Money::from_cents(1234),
            paid_by: Party::PartyA,
            split_type,
            party_a_share: a,
            party_b_share: b,
            category: Category::Food,
            date: NaiveDate::from_ymd_opt(2025, 1, 2).unwrap(),
            note: None,
        }
    }

    #[test]
    fn test_equal_split_ignores_shares() {
        assert!(draft(SplitType::Equal, 0, 0).validate().is_ok());
        assert!(draft(SplitType::Equal, 99, 1).validate().is_ok());
    }

    #[test]
    fn test_percentage_shares_must_sum_to_100() {
        assert!(draft(SplitType::Percentage, 60, 40).validate().is_ok());
        assert_eq!(
            draft(SplitType::Percentage, 60, 50).validate(),
            Err(ExpenseValidationError::PercentageSharesInvalid {
                party_a: 60,
                party_b: 50
            })
        );
    }

    #[test]
    fn test_exact_shares_must_sum_to_amount() {
        assert!(draft(SplitType::Exact, 1000, 234).validate().is_ok());
        assert_eq!(
            draft(SplitType::Exact, 1000, 200).validate(),
            Err(ExpenseValidationError::ExactSharesInvalid {
                expected: 1234,
                actual: 1200
            })
        );
    }

    #[test]
    fn test_empty_description_rejected() {
        let mut d = draft(SplitType::Equal, 50, 50);
        d.description = "   ".into();
        assert_eq!(
            d.validate(),
            Err(ExpenseValidationError::EmptyDescription)
        );
    }

    #[test]
    fn test_non_positive_amount_rejected() {
        let mut d = draft(SplitType::Equal, 50, 50);
        d.amount = Money::zero();
        assert!(matches!(
            d.validate(),
            Err(ExpenseValidationError::NonPositiveAmount(0))
        ));
    }

    #[test]
    fn test_from_input_assigns_identity() {
        let expense = Expense::from_input(draft(SplitType::Equal, 50, 50));
        assert_eq!(expense.description, "Dinner");
        assert_eq!(expense.amount.cents(), 1234);
        assert!(expense.validate().is_ok());
    }

    #[test]
    fn test_serialization_round_trip() {
        let expense = Expense::from_input(draft(SplitType::Percentage, 70, 30));
        let json = serde_json::to_string(&expense).unwrap();
        let parsed: Expense = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.id, expense.id);
        assert_eq!(parsed.split_type, SplitType::Percentage);
        assert_eq!(parsed.party_a_share, 70);
    }
}

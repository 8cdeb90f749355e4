//! Expense CLI commands

use clap::Subcommand;

use crate::classify;
use crate::config::Settings;
use crate::display::format_expense_register;
use crate::error::{SplitmateError, SplitmateResult};
use crate::import::paid_by_from_text;
use crate::models::{Category, CreateExpenseInput, Party, SplitType};
use crate::normalize::{date_to_iso, money_to_minor_units};
use crate::storage::{ExpenseStore, Storage};

/// Expense management commands
#[derive(Subcommand)]
pub enum ExpenseCommands {
    /// Add a new expense
    Add {
        /// What the money was spent on
        description: String,
        /// Amount, e.g. "12.34" or "$12.34"
        amount: String,
        /// Who paid (name, "a"/"b", "1"/"2")
        #[arg(short, long)]
        paid_by: Option<String>,
        /// Category name or id
        #[arg(short, long)]
        category: Option<String>,
        /// Purchase date (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Split policy: equal, percentage, or exact
        #[arg(long, default_value = "equal")]
        split: String,
        /// Party A's share (percent or cents, depending on --split)
        #[arg(long)]
        share_a: Option<i64>,
        /// Party B's share (percent or cents, depending on --split)
        #[arg(long)]
        share_b: Option<i64>,
        /// Free-form note
        #[arg(short, long)]
        note: Option<String>,
    },
    /// List expenses
    List {
        /// Number of expenses to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

/// Handle an expense subcommand
pub fn handle_expense_command(
    storage: &Storage,
    settings: &Settings,
    command: ExpenseCommands,
) -> SplitmateResult<()> {
    match command {
        ExpenseCommands::Add {
            description,
            amount,
            paid_by,
            category,
            date,
            split,
            share_a,
            share_b,
            note,
        } => {
            let names = settings.party_names();

            let amount = money_to_minor_units(&amount)
                .filter(|a| a.is_positive())
                .ok_or_else(|| {
                    SplitmateError::Validation(format!("Not a positive amount: '{}'", amount))
                })?;

            let date = match date {
                Some(text) => date_to_iso(&text).ok_or_else(|| {
                    SplitmateError::Validation(format!("Could not parse date: '{}'", text))
                })?,
                None => chrono::Local::now().date_naive(),
            };

            let paid_by = paid_by
                .map(|text| paid_by_from_text(&text, &names))
                .unwrap_or(Party::PartyA);

            let category = category
                .as_deref()
                .and_then(classify::classify)
                .unwrap_or(Category::Other);

            let split_type = parse_split_type(&split)?;
            let (party_a_share, party_b_share) = match split_type {
                SplitType::Equal => (50, 50),
                SplitType::Percentage => {
                    let a = share_a.unwrap_or(settings.default_split_percent);
                    (a, share_b.unwrap_or(100 - a))
                }
                SplitType::Exact => match (share_a, share_b) {
                    (Some(a), Some(b)) => (a, b),
                    _ => {
                        return Err(SplitmateError::Validation(
                            "Exact splits need both --share-a and --share-b in cents".into(),
                        ))
                    }
                },
            };

            let input = CreateExpenseInput {
                description,
                amount,
                paid_by,
                split_type,
                party_a_share,
                party_b_share,
                category,
                date,
                note,
            };

            let expense = storage.create_expense(input)?;
            println!(
                "Added expense {}: {} {} paid by {}",
                expense.id,
                expense.description,
                expense.amount,
                names.name_of(expense.paid_by)
            );
            Ok(())
        }
        ExpenseCommands::List { limit } => {
            let names = settings.party_names();
            let mut expenses = storage.expenses.get_all()?;
            expenses.truncate(limit);
            print!("{}", format_expense_register(&expenses, &names));
            Ok(())
        }
    }
}

fn parse_split_type(text: &str) -> SplitmateResult<SplitType> {
    match text.to_lowercase().as_str() {
        "equal" => Ok(SplitType::Equal),
        "percentage" | "percent" => Ok(SplitType::Percentage),
        "exact" => Ok(SplitType::Exact),
        other => Err(SplitmateError::Validation(format!(
            "Unknown split type '{}'; expected equal, percentage, or exact",
            other
        ))),
    }
}

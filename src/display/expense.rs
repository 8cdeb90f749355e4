//! Expense display formatting

use crate::models::{Expense, PartyNames};

/// Truncate a string to a maximum display width
fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", cut)
    }
}

/// Format a single expense for display (register row)
pub fn format_expense_row(expense: &Expense, names: &PartyNames) -> String {
    format!(
        "{} {:20} {:>10} {:12} {:14} {}",
        expense.date.format("%Y-%m-%d"),
        truncate(&expense.description, 20),
        expense.amount.to_string(),
        truncate(names.name_of(expense.paid_by), 12),
        expense.category.label(),
        expense.split_type
    )
}

/// Format a list of expenses as a register
pub fn format_expense_register(expenses: &[Expense], names: &PartyNames) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:20} {:>10} {:12} {:14} {}\n",
        "Date", "Description", "Amount", "Paid by", "Category", "Split"
    ));
    output.push_str(&"-".repeat(76));
    output.push('\n');

    for expense in expenses {
        output.push_str(&format_expense_row(expense, names));
        output.push('\n');
    }

    output
}

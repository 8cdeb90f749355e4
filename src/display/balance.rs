//! Balance display formatting

use crate::models::{Balance, PartyNames};

/// Format the derived balance for terminal display
pub fn format_balance(balance: &Balance, names: &PartyNames, symbol: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:16} {:>12}\n",
        names.party_a,
        balance.party_a_total_paid.format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "{:16} {:>12}\n",
        names.party_b,
        balance.party_b_total_paid.format_with_symbol(symbol)
    ));
    output.push_str(&"-".repeat(29));
    output.push('\n');

    match balance.debtor() {
        Some(debtor) => {
            let creditor = debtor.other();
            output.push_str(&format!(
                "{} owes {} {}\n",
                names.name_of(debtor),
                names.name_of(creditor),
                balance.amount_owed().format_with_symbol(symbol)
            ));
        }
        None => {
            output.push_str("All settled up.\n");
        }
    }

    output
}

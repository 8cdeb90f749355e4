//! Balance CLI command

use crate::config::Settings;
use crate::display::format_balance;
use crate::error::SplitmateResult;
use crate::services::LedgerService;
use crate::storage::Storage;

/// Recompute and print the current balance
pub fn handle_balance_command(storage: &Storage, settings: &Settings) -> SplitmateResult<()> {
    let ledger = LedgerService::new(storage);
    let balance = ledger.balance()?;

    let names = settings.party_names();
    print!(
        "{}",
        format_balance(&balance, &names, &settings.currency_symbol)
    );
    Ok(())
}

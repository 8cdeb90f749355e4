//! Settlement CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::error::{SplitmateError, SplitmateResult};
use crate::import::paid_by_from_text;
use crate::models::Settlement;
use crate::normalize::{date_to_iso, money_to_minor_units};
use crate::storage::Storage;

/// Settlement management commands
#[derive(Subcommand)]
pub enum SettleCommands {
    /// Record a payment from one party to the other
    Add {
        /// Amount transferred, e.g. "25.00"
        amount: String,
        /// Who sent the money (name, "a"/"b", "1"/"2")
        #[arg(short, long)]
        paid_by: String,
        /// Transfer date (defaults to today)
        #[arg(short, long)]
        date: Option<String>,
        /// Free-form note
        #[arg(short, long)]
        note: Option<String>,
    },
    /// List settlements
    List,
}

/// Handle a settlement subcommand
pub fn handle_settle_command(
    storage: &Storage,
    settings: &Settings,
    command: SettleCommands,
) -> SplitmateResult<()> {
    let names = settings.party_names();

    match command {
        SettleCommands::Add {
            amount,
            paid_by,
            date,
            note,
        } => {
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

            let paid_by = paid_by_from_text(&paid_by, &names);
            let settlement = Settlement::new(amount, paid_by, date, note);
            let settlement = storage.create_settlement(settlement)?;

            println!(
                "Recorded settlement {}: {} paid {} {}",
                settlement.id,
                names.name_of(settlement.paid_by),
                names.name_of(settlement.paid_to),
                settlement.amount
            );
            Ok(())
        }
        SettleCommands::List => {
            let settlements = storage.settlements.get_all()?;
            if settlements.is_empty() {
                println!("No settlements found.");
                return Ok(());
            }

            println!(
                "{:10} {:>10} {:12} {:12}",
                "Date", "Amount", "From", "To"
            );
            println!("{}", "-".repeat(48));
            for settlement in settlements {
                println!(
                    "{} {:>10} {:12} {:12}",
                    settlement.date.format("%Y-%m-%d"),
                    settlement.amount.to_string(),
                    names.name_of(settlement.paid_by),
                    names.name_of(settlement.paid_to)
                );
            }
            Ok(())
        }
    }
}

use anyhow::Result;
use clap::{Parser, Subcommand};

use splitmate::cli::{
    handle_balance_command, handle_expense_command, handle_import_command, handle_scan_command,
    handle_settle_command, ExpenseCommands, SettleCommands,
};
use splitmate::config::{paths::SplitmatePaths, settings::Settings};
use splitmate::storage::Storage;

#[derive(Parser)]
#[command(
    name = "splitmate",
    version,
    about = "Terminal-based shared expense tracker for two people",
    long_about = "Splitmate tracks shared expenses for two people, splits \
                  costs, and settles balances. Expenses can be entered by \
                  hand, imported from CSV exports, or applied from scanned \
                  receipts."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the ledger with both party names
    Init {
        /// Display name for Party A
        #[arg(long)]
        party_a: Option<String>,
        /// Display name for Party B
        #[arg(long)]
        party_b: Option<String>,
    },

    /// Show current configuration and paths
    Config,

    /// Expense management commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Settlement management commands
    #[command(subcommand, alias = "settlement")]
    Settle(SettleCommands),

    /// Show who owes whom
    Balance,

    /// Import expenses from a CSV file
    Import {
        /// Path to the CSV file
        file: String,
        /// Preview only, import nothing
        #[arg(long)]
        dry_run: bool,
        /// Refuse the import when any row is invalid
        #[arg(long)]
        no_skip_invalid: bool,
    },

    /// Extract fields from a scanned receipt (document-analysis JSON)
    Scan {
        /// Path to the saved analysis response
        file: String,
        /// Create an expense from the extracted fields
        #[arg(long)]
        apply: bool,
        /// Who paid (name, "a"/"b", "1"/"2")
        #[arg(short, long)]
        paid_by: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "splitmate=warn".to_string()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let paths = SplitmatePaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Commands::Init { party_a, party_b } => {
            if let Some(name) = party_a {
                settings.party_a_name = name;
            }
            if let Some(name) = party_b {
                settings.party_b_name = name;
            }
            settings.setup_completed = true;
            settings.save(&paths)?;

            // Create the data files up front so later commands start clean
            let storage = Storage::new(paths.clone())?;
            storage.save_all()?;

            println!(
                "Initialized ledger for {} and {} at {}",
                settings.party_a_name,
                settings.party_b_name,
                paths.base_dir().display()
            );
        }
        Commands::Config => {
            println!("Data directory: {}", paths.base_dir().display());
            println!("Party A:        {}", settings.party_a_name);
            println!("Party B:        {}", settings.party_b_name);
            println!("Default split:  {}%", settings.default_split_percent);
            println!("Currency:       {}", settings.currency_symbol);
            println!("Initialized:    {}", paths.is_initialized());
        }
        Commands::Expense(command) => {
            let storage = open_storage(&paths)?;
            handle_expense_command(&storage, &settings, command)?;
        }
        Commands::Settle(command) => {
            let storage = open_storage(&paths)?;
            handle_settle_command(&storage, &settings, command)?;
        }
        Commands::Balance => {
            let storage = open_storage(&paths)?;
            handle_balance_command(&storage, &settings)?;
        }
        Commands::Import {
            file,
            dry_run,
            no_skip_invalid,
        } => {
            let storage = open_storage(&paths)?;
            handle_import_command(&storage, &settings, &file, dry_run, no_skip_invalid)?;
        }
        Commands::Scan {
            file,
            apply,
            paid_by,
        } => {
            let storage = open_storage(&paths)?;
            handle_scan_command(&storage, &settings, &file, apply, paid_by)?;
        }
    }

    Ok(())
}

fn open_storage(paths: &SplitmatePaths) -> Result<Storage> {
    let storage = Storage::new(paths.clone())?;
    storage.load_all()?;
    Ok(storage)
}

//! Transaction CLI commands

use std::io::Write;
use std::path::PathBuf;

use chrono::Local;
use clap::Subcommand;

use crate::config::Settings;
use crate::display::{format_transaction_details, format_transaction_register};
use crate::error::{TallyError, TallyResult};
use crate::export::export_user_transactions_csv;
use crate::models::Money;
use crate::services::{
    parse_transaction_date, CategoryService, CreateTransactionInput, TransactionService,
    UserService,
};
use crate::storage::Storage;

use super::create_output_file;

/// Transaction subcommands
#[derive(Subcommand)]
pub enum TransactionCommands {
    /// Add a new transaction
    Add {
        /// Owner's email
        #[arg(short, long)]
        user: String,
        /// What the money was for
        description: String,
        /// Amount (e.g., "45.76"); the sign is taken from --debit
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Record as an expense instead of income
        #[arg(long)]
        debit: bool,
        /// Date (YYYY-MM-DD or "DD Mon YYYY", optionally with HH:MM[:SS])
        #[arg(short, long)]
        date: Option<String>,
        /// Category name
        #[arg(short, long)]
        category: Option<String>,
    },

    /// List a user's transactions, newest first
    List {
        /// Owner's email
        #[arg(short, long)]
        user: String,
        /// Page number
        #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,
    },

    /// Delete a transaction
    Delete {
        /// Transaction ID
        id: String,
    },

    /// Export a user's transactions to CSV
    Export {
        /// Owner's email
        #[arg(short, long)]
        user: String,
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
        /// Only export these transaction IDs
        #[arg(long = "id")]
        ids: Vec<String>,
    },
}

/// Handle a transaction command
pub fn handle_transaction_command(
    storage: &Storage,
    settings: &Settings,
    cmd: TransactionCommands,
) -> TallyResult<()> {
    let users = UserService::new(storage);
    let service = TransactionService::new(storage);

    match cmd {
        TransactionCommands::Add {
            user,
            description,
            amount,
            debit,
            date,
            category,
        } => {
            let user = users.require(&user)?;

            let amount = Money::parse(&amount)
                .map_err(|e| TallyError::Validation(e.to_string()))?;

            let date = date
                .map(|d| parse_transaction_date(&d, Local::now().naive_local()))
                .transpose()?;

            let category_id = match category {
                Some(name) => Some(
                    CategoryService::new(storage)
                        .find(user.id, &name)?
                        .ok_or_else(|| TallyError::category_not_found(&name))?
                        .id,
                ),
                None => None,
            };

            let txn = service.create(CreateTransactionInput {
                user_id: user.id,
                description,
                amount,
                is_debit: debit,
                date,
                category_id,
            })?;

            let names = storage.categories.names()?;
            println!("Created transaction:");
            print!(
                "{}",
                format_transaction_details(&txn, &names, &settings.currency_symbol)
            );
        }

        TransactionCommands::List { user, page } => {
            let user = users.require(&user)?;
            let page = service.list_page(user.id, page as usize, settings.page_size)?;
            let names = storage.categories.names()?;
            print!(
                "{}",
                format_transaction_register(&page, &names, &settings.currency_symbol)
            );
        }

        TransactionCommands::Delete { id } => {
            let txn = service.delete(&id)?;
            println!("Deleted transaction: {} ({})", txn.id, txn.description);
        }

        TransactionCommands::Export { user, output, ids } => {
            let user = users.require(&user)?;
            let date_format = settings.export_date_format.as_str();

            match output {
                Some(path) => {
                    let mut writer = create_output_file(&path)?;
                    let written =
                        export_user_transactions_csv(storage, user.id, &ids, date_format, &mut writer)?;
                    writer
                        .flush()
                        .map_err(|e| TallyError::Export(e.to_string()))?;
                    println!("Exported {} transactions to: {}", written, path.display());
                }
                None => {
                    let stdout = std::io::stdout();
                    export_user_transactions_csv(storage, user.id, &ids, date_format, stdout.lock())?;
                }
            }
        }
    }

    Ok(())
}

//! CLI commands for reports
//!
//! Profit/loss and income/expense reports, printed as a table or exported
//! to CSV.

use std::io::Write;
use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Args, Subcommand};

use crate::config::Settings;
use crate::display::format_report_table;
use crate::error::{TallyError, TallyResult};
use crate::reports::{calculate_income_expenses, calculate_profit_loss, RangeMode, ReportKind};
use crate::services::UserService;
use crate::storage::Storage;

use super::create_output_file;

/// Options shared by every report
#[derive(Args, Debug)]
pub struct ReportOptions {
    /// Owner's email
    #[arg(short, long)]
    user: String,

    /// "year" for months of the as-of year, "all" for every year
    #[arg(short, long)]
    range: Option<RangeMode>,

    /// Reference date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    as_of: Option<NaiveDate>,

    /// Export to CSV file
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Report subcommands
#[derive(Subcommand, Debug)]
pub enum ReportCommands {
    /// Profit and loss per period
    #[command(alias = "pl")]
    ProfitLoss(ReportOptions),

    /// Income and expenses per period
    #[command(alias = "ie")]
    IncomeExpenses(ReportOptions),
}

/// Handle report commands
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    cmd: ReportCommands,
) -> TallyResult<()> {
    let (kind, options) = match cmd {
        ReportCommands::ProfitLoss(options) => (ReportKind::ProfitLoss, options),
        ReportCommands::IncomeExpenses(options) => (ReportKind::IncomeExpenses, options),
    };

    let user = UserService::new(storage).require(&options.user)?;
    let range = options.range.unwrap_or(settings.default_range);
    let as_of = options
        .as_of
        .unwrap_or_else(|| Local::now().date_naive());

    let report = match kind {
        ReportKind::ProfitLoss => calculate_profit_loss(&storage.transactions, range, user.id, as_of)?,
        ReportKind::IncomeExpenses => {
            calculate_income_expenses(&storage.transactions, range, user.id, as_of)?
        }
    };

    match options.output {
        Some(path) => {
            let mut writer = create_output_file(&path)?;
            report.export_csv(&mut writer)?;
            writer
                .flush()
                .map_err(|e| TallyError::Export(e.to_string()))?;
            println!("{} report exported to: {}", report.kind.title(), path.display());
        }
        None => print!("{}", format_report_table(&report, &settings.currency_symbol)),
    }

    Ok(())
}

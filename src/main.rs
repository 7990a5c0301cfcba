use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::EnvFilter;

use tally::cli::{
    handle_audit_command, handle_category_command, handle_report_command,
    handle_transaction_command, handle_user_command, AuditArgs, CategoryCommands, ReportCommands,
    TransactionCommands, UserCommands,
};
use tally::config::{paths::TallyPaths, settings::Settings};
use tally::storage::Storage;

#[derive(Parser)]
#[command(
    name = "tally",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based income and expense tracker",
    long_about = "Tally records income and expenses per user and reports profit/loss \
                  and income/expenses by month within a year or by year across all time."
)]
struct Cli {
    /// Log verbosity; RUST_LOG takes precedence when set
    #[arg(long, global = true, default_value_t = LevelFilter::WARN)]
    log_level: LevelFilter,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// User management commands
    #[command(subcommand)]
    User(UserCommands),

    /// Category management commands
    #[command(subcommand)]
    Category(CategoryCommands),

    /// Transaction management commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Profit/loss and income/expense reports
    #[command(subcommand)]
    Report(ReportCommands),

    /// Show recent entries of the audit log
    Audit(AuditArgs),

    /// Initialize the data directory and settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level);

    let paths = TallyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    debug!(base_dir = %paths.base_dir().display(), "resolved paths");

    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    match cli.command {
        Some(Commands::User(cmd)) => handle_user_command(&storage, cmd)?,
        Some(Commands::Category(cmd)) => handle_category_command(&storage, cmd)?,
        Some(Commands::Transaction(cmd)) => handle_transaction_command(&storage, &settings, cmd)?,
        Some(Commands::Report(cmd)) => handle_report_command(&storage, &settings, cmd)?,
        Some(Commands::Audit(args)) => handle_audit_command(&storage, args)?,
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!("Tally is already initialized at: {}", paths.base_dir().display());
            } else {
                settings.save(&paths)?;
                storage.save_all()?;
                println!("Initialized Tally at: {}", paths.base_dir().display());
                println!();
                println!("Run 'tally user add <email>' to register a user.");
            }
        }
        Some(Commands::Config) => {
            println!("Tally Configuration");
            println!("===================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Settings file:   {}", paths.settings_file().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:    {}", settings.currency_symbol);
            println!("  Page size:          {}", settings.page_size);
            println!("  Export date format: {}", settings.export_date_format);
            println!("  Default range:      {}", settings.default_range);
        }
        None => {
            println!("Tally - income and expense tracking");
            println!();
            println!("Run 'tally --help' for usage information.");
        }
    }

    Ok(())
}

/// Initializes the tracing subscriber.
fn init_logger(level: LevelFilter) {
    let filter = match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!(
            "{}={},{}={}",
            env!("CARGO_CRATE_NAME"),
            level,
            env!("CARGO_BIN_NAME"),
            level
        )),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

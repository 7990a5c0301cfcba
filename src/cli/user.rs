//! User CLI commands

use clap::Subcommand;

use crate::display::format_user_list;
use crate::error::TallyResult;
use crate::services::UserService;
use crate::storage::Storage;

/// User subcommands
#[derive(Subcommand)]
pub enum UserCommands {
    /// Register a new user
    Add {
        /// Email address
        email: String,
    },

    /// List users
    List,
}

/// Handle a user command
pub fn handle_user_command(storage: &Storage, cmd: UserCommands) -> TallyResult<()> {
    let service = UserService::new(storage);

    match cmd {
        UserCommands::Add { email } => {
            let user = service.create(&email)?;
            println!("Created user: {}", user.email);
            println!("  ID: {}", user.id);
        }

        UserCommands::List => {
            print!("{}", format_user_list(&service.list()?));
        }
    }

    Ok(())
}

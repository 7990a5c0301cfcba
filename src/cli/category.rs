//! Category CLI commands

use clap::Subcommand;

use crate::display::format_category_list;
use crate::error::TallyResult;
use crate::services::{CategoryService, UserService};
use crate::storage::Storage;

/// Category subcommands
#[derive(Subcommand)]
pub enum CategoryCommands {
    /// Create a new category
    Add {
        /// Category name
        name: String,
        /// Owner's email
        #[arg(short, long)]
        user: String,
    },

    /// List a user's categories
    List {
        /// Owner's email
        #[arg(short, long)]
        user: String,
    },
}

/// Handle a category command
pub fn handle_category_command(storage: &Storage, cmd: CategoryCommands) -> TallyResult<()> {
    let users = UserService::new(storage);
    let service = CategoryService::new(storage);

    match cmd {
        CategoryCommands::Add { name, user } => {
            let user = users.require(&user)?;
            let category = service.create(user.id, &name)?;
            println!("Created category: {}", category.name);
            println!("  ID: {}", category.id);
        }

        CategoryCommands::List { user } => {
            let user = users.require(&user)?;
            let categories = service.list(user.id)?;
            print!("{}", format_category_list(&user, &categories));
        }
    }

    Ok(())
}

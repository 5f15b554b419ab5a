//! Inventory CLI - terminal front end and database migrations.
//!
//! # Usage
//!
//! ```bash
//! # Run item store migrations
//! inv migrate
//!
//! # Log in against the API (session stored under the config directory)
//! inv login -u admin -p admin123
//!
//! # Browse and edit items
//! inv items list --search widget
//! inv items add --name Widget --description "A small widget"
//! inv items delete 4
//!
//! # Forget the session
//! inv logout
//! ```
//!
//! # Commands
//!
//! - `migrate` - Run database migrations
//! - `login` / `logout` / `status` - Manage the local session
//! - `items` - List, show, add, update, and delete items

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use inventory_client::{ApiClient, SessionStore, api::DEFAULT_BASE_URL};
use inventory_core::ItemId;

mod commands;
mod views;

#[derive(Parser)]
#[command(name = "inv")]
#[command(author, version, about = "Inventory CLI tools")]
struct Cli {
    /// Base URL of the inventory API
    #[arg(long, global = true, env = "INVENTORY_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Session file (defaults to the user config directory)
    #[arg(long, global = true, env = "INVENTORY_SESSION_FILE")]
    session_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run database migrations
    Migrate,
    /// Log in to the inventory API
    Login {
        /// Username
        #[arg(short, long)]
        username: String,

        /// Password
        #[arg(short, long, env = "INVENTORY_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Forget the stored session
    Logout,
    /// Show whether a session is stored
    Status,
    /// Work with items
    Items {
        #[command(subcommand)]
        action: ItemAction,
    },
}

#[derive(Subcommand)]
enum ItemAction {
    /// List items
    List {
        /// Only show items whose name or description contains this text
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Show one item
    Show {
        /// Item id
        id: ItemId,
    },
    /// Add a new item
    Add {
        /// Item name
        #[arg(short, long, default_value = "")]
        name: String,

        /// Item description
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Replace an existing item
    Update {
        /// Item id
        id: ItemId,

        /// Item name
        #[arg(short, long, default_value = "")]
        name: String,

        /// Item description
        #[arg(short, long, default_value = "")]
        description: String,
    },
    /// Delete an item
    Delete {
        /// Item id
        id: ItemId,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // Initialize tracing; quiet unless RUST_LOG says otherwise
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn,inventory_cli=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    if matches!(cli.command, Commands::Migrate) {
        commands::migrate::run().await?;
        return Ok(());
    }

    let session = cli
        .session_file
        .map_or_else(SessionStore::default_location, SessionStore::new);
    let api = ApiClient::new(&cli.api_url, session)?;

    match cli.command {
        Commands::Migrate => {}
        Commands::Login { username, password } => {
            commands::auth::login(&api, &username, &password).await?;
        }
        Commands::Logout => commands::auth::logout(&api).await?,
        Commands::Status => commands::auth::status(&api).await?,
        Commands::Items { action } => match action {
            ItemAction::List { search } => commands::items::list(&api, search.as_deref()).await?,
            ItemAction::Show { id } => commands::items::show(&api, id).await?,
            ItemAction::Add { name, description } => {
                commands::items::add(&api, &name, &description).await?;
            }
            ItemAction::Update {
                id,
                name,
                description,
            } => commands::items::update(&api, id, &name, &description).await?,
            ItemAction::Delete { id, yes } => commands::items::delete(&api, id, yes).await?,
        },
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_item_delete() {
        let cli = Cli::try_parse_from(["inv", "items", "delete", "4", "--yes"]).unwrap();
        match cli.command {
            Commands::Items {
                action: ItemAction::Delete { id, yes },
            } => {
                assert_eq!(id, ItemId::new(4));
                assert!(yes);
            }
            _ => panic!("expected items delete"),
        }
    }

    #[test]
    fn test_item_id_must_be_integer() {
        assert!(Cli::try_parse_from(["inv", "items", "show", "abc"]).is_err());
    }
}

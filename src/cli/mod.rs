// CLI module for operations run against the database without the HTTP server

pub mod admin;
pub mod migrate;

use clap::{Parser, Subcommand};
use std::sync::Arc;

use crate::app_data::AppData;

/// Metaverse backend CLI
#[derive(Parser)]
#[command(name = "metaverse")]
#[command(about = "Metaverse space backend", long_about = None)]
pub struct Cli {
    /// Runs the HTTP server when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the HTTP server (default)
    Serve,

    /// Apply pending database migrations and exit
    Migrate,

    /// Create an account with the Admin role
    CreateAdmin {
        /// Username for the new admin
        #[arg(long)]
        username: String,

        /// Password; prompted for when omitted
        #[arg(long)]
        password: Option<String>,
    },
}

/// Execute a CLI command that needs the full application data
///
/// `Serve` and `Migrate` are handled by `main` before AppData exists.
pub async fn execute_command(
    command: Commands,
    app_data: Arc<AppData>,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::CreateAdmin { username, password } => {
            let password = match password {
                Some(password) => password,
                None => admin::prompt_for_password()?,
            };
            let user_id = admin::create_admin(app_data, &username, &password).await?;
            println!("✓ Admin '{}' created with id {}", username, user_id);
        }
        Commands::Serve | Commands::Migrate => {
            tracing::warn!("Command is handled by main, nothing to execute");
        }
    }

    Ok(())
}

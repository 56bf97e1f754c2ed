use clap::Parser;
use poem::{Server, listener::TcpListener};
use std::sync::Arc;

use metaverse_backend::AppData;
use metaverse_backend::api::build_app;
use metaverse_backend::cli::{self, Cli, Commands};
use metaverse_backend::config::{
    BootstrapSettings, LoggingConfig, SecretManager, SystemEnvironment, init_database, init_logging,
    migrate_database,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let logging_config = LoggingConfig::from_env();
    init_logging(&logging_config)?;

    let args = Cli::parse();
    let settings = BootstrapSettings::from_env()?;

    let command = args.command.unwrap_or(Commands::Serve);
    if let Commands::Migrate = command {
        return cli::migrate::run_migrations(&settings).await;
    }

    let secret_manager = Arc::new(SecretManager::init(&SystemEnvironment)?);

    let db = init_database(&settings).await?;
    migrate_database(&db).await?;

    let app_data = Arc::new(AppData::init(db, secret_manager));

    if !matches!(command, Commands::Serve) {
        return cli::execute_command(command, app_data).await;
    }

    let app = build_app(app_data, &settings.public_url());
    let address = settings.server_address();

    tracing::info!("Starting server on http://{}", address);
    tracing::info!("API available at {}, Swagger UI under /swagger", settings.public_url());

    Server::new(TcpListener::bind(address)).run(app).await?;

    Ok(())
}

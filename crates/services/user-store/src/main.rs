//! User Store - operator CLI for the users table.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use user_store::cli::{Cli, Commands};
use user_store::{commands, UserStoreConfig};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = UserStoreConfig::from_env();

    init_tracing(cli.verbose, &config.log_level);
    tracing::debug!(?config, "Configuration loaded");

    let result = match cli.command {
        Commands::Migrate(args) => commands::migrate::execute(args, &config).await,
        Commands::Users(args) => commands::users::execute(args, &config).await,
    };

    if let Err(e) = result {
        tracing::error!(code = e.code(), "Command failed: {}", e.user_message());
        std::process::exit(1);
    }
}

/// Initialize tracing subscriber (verbose mode forces debug level)
fn init_tracing(verbose: bool, log_level: &str) {
    let filter = if verbose { "debug" } else { log_level };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}

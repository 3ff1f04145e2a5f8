//! Migrate command - Database migration management.

use common::{AppError, AppResult};

use crate::cli::{MigrateAction, MigrateArgs};
use crate::config::UserStoreConfig;
use crate::infra::Database;

/// Execute the migrate command
pub async fn execute(args: MigrateArgs, config: &UserStoreConfig) -> AppResult<()> {
    tracing::info!("Running migration command...");

    // Connect without auto-running migrations for manual control
    let db = Database::connect_without_migrations(&config.database)
        .await
        .map_err(|e| AppError::internal(format!("Database connection failed: {}", e)))?;

    match args.action {
        MigrateAction::Up => {
            tracing::info!("Running pending migrations...");
            db.run_migrations().await?;
            tracing::info!("Migrations completed successfully");
        }
        MigrateAction::Down => {
            tracing::info!("Rolling back last migration...");
            db.rollback_migration().await?;
            tracing::info!("Rollback completed successfully");
        }
        MigrateAction::Status => {
            for state in db.migration_status().await? {
                let marker = if state.applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, state.name);
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Resetting database and running all migrations...");
            db.fresh_migrations().await?;
            tracing::info!("Fresh migrations completed successfully");
        }
    }

    Ok(())
}

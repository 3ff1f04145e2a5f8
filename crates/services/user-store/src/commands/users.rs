//! Users command - look up and manage stored users.
//!
//! This is a caller of [`UserRepository`]: absent lookups become
//! `AppError::NotFound` here, not in the repository.

use serde::Serialize;

use common::{AppError, AppResult, OptionExt};
use domain::PageRequest;

use crate::cli::{UsersAction, UsersArgs};
use crate::config::UserStoreConfig;
use crate::infra::Database;
use crate::repository::{UserRepository, UserStore};

/// Execute the users command
pub async fn execute(args: UsersArgs, config: &UserStoreConfig) -> AppResult<()> {
    let db = Database::connect_without_migrations(&config.database).await?;
    let repo = UserStore::new(db.get_connection());

    let output = run(args.action, &repo).await?;
    println!("{}", output);

    Ok(())
}

/// Run a users action against any repository and render the result.
pub async fn run(action: UsersAction, repo: &dyn UserRepository) -> AppResult<String> {
    match action {
        UsersAction::Find { username } => {
            let user = repo.find_by_username(&username).await?.ok_or_not_found()?;
            render(&user)
        }
        UsersAction::Get { id } => {
            let user = repo.find_by_id(id).await?.ok_or_not_found()?;
            render(&user)
        }
        UsersAction::List {
            page,
            per_page,
            sort,
            desc,
        } => {
            let request = PageRequest::new(page, per_page).sorted(sort.into_sort(desc));
            render(&repo.find_page(request).await?)
        }
        UsersAction::Count => Ok(repo.count().await?.to_string()),
        UsersAction::Delete { id } => {
            if !repo.delete_by_id(id).await? {
                return Err(AppError::NotFound);
            }
            tracing::info!(id, "User deleted");
            Ok(format!("Deleted user {}", id))
        }
    }
}

fn render<T: Serialize>(value: &T) -> AppResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::internal(e.to_string()))
}

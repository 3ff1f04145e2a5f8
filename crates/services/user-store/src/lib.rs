//! User Store Library
//!
//! Persistence for `User` records: a SeaORM entity, the [`UserRepository`]
//! contract with its [`UserStore`] implementation, migrations, and the
//! commands behind the `user-store` operator binary.
//!
//! [`UserRepository`]: repository::UserRepository
//! [`UserStore`]: repository::UserStore

pub mod cli;
pub mod commands;
pub mod config;
pub mod infra;
pub mod repository;

pub use config::UserStoreConfig;
pub use infra::Database;
pub use repository::{DbResult, UserRepository, UserStore};

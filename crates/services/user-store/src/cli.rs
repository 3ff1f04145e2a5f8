//! CLI argument definitions.

use clap::{Parser, Subcommand, ValueEnum};

use domain::{Sort, UserSortField, DEFAULT_PAGE_NUMBER, DEFAULT_PAGE_SIZE};

/// Operator tool for the users table
#[derive(Parser, Debug)]
#[command(name = "user-store")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run database migrations
    Migrate(MigrateArgs),

    /// Query and manage stored users
    Users(UsersArgs),
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

/// Arguments for the users command
#[derive(Parser, Debug)]
pub struct UsersArgs {
    #[command(subcommand)]
    pub action: UsersAction,
}

/// User actions
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum UsersAction {
    /// Show the user with this exact username
    Find {
        username: String,
    },
    /// Show the user with this ID
    Get {
        id: i64,
    },
    /// List users one page at a time
    List {
        #[arg(long, default_value_t = DEFAULT_PAGE_NUMBER)]
        page: u64,
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        per_page: u64,
        #[arg(long, value_enum, default_value_t = SortKey::Id)]
        sort: SortKey,
        /// Sort descending
        #[arg(long)]
        desc: bool,
    },
    /// Print the number of stored users
    Count,
    /// Delete the user with this ID
    Delete {
        id: i64,
    },
}

/// Sortable columns accepted on the command line
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[value(rename_all = "snake_case")]
pub enum SortKey {
    Id,
    Username,
    CreatedAt,
}

impl SortKey {
    pub fn into_sort(self, desc: bool) -> Sort {
        let field = match self {
            SortKey::Id => UserSortField::Id,
            SortKey::Username => UserSortField::Username,
            SortKey::CreatedAt => UserSortField::CreatedAt,
        };

        if desc {
            Sort::desc(field)
        } else {
            Sort::asc(field)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_find() {
        let cli = Cli::try_parse_from(["user-store", "users", "find", "alice"]).unwrap();
        match cli.command {
            Commands::Users(args) => assert_eq!(
                args.action,
                UsersAction::Find {
                    username: "alice".to_string()
                }
            ),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_list_defaults() {
        let cli = Cli::try_parse_from(["user-store", "users", "list"]).unwrap();
        match cli.command {
            Commands::Users(args) => assert_eq!(
                args.action,
                UsersAction::List {
                    page: DEFAULT_PAGE_NUMBER,
                    per_page: DEFAULT_PAGE_SIZE,
                    sort: SortKey::Id,
                    desc: false,
                }
            ),
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_list_sorted() {
        let cli = Cli::try_parse_from([
            "user-store", "-v", "users", "list", "--sort", "created_at", "--desc",
        ])
        .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Users(args) => match args.action {
                UsersAction::List { sort, desc, .. } => {
                    assert_eq!(sort.into_sort(desc), Sort::desc(UserSortField::CreatedAt));
                }
                other => panic!("unexpected action: {:?}", other),
            },
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_non_numeric_id() {
        assert!(Cli::try_parse_from(["user-store", "users", "get", "abc"]).is_err());
    }
}

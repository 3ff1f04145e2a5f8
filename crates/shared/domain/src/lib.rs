//! Domain layer - Core entities and value objects.
//!
//! Pure types with no infrastructure dependencies. The persistence crate
//! maps its database models onto these.

pub mod constants;
pub mod pagination;
pub mod user;

pub use constants::*;
pub use pagination::{Page, PageRequest, Sort, SortDirection, UserSortField};
pub use user::{NewUser, User, UserRole};

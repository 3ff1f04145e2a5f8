//! User repository: explicit CRUD, pagination, and lookup by username.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder, Select,
};

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use domain::{NewUser, Page, PageRequest, Sort, SortDirection, User, UserSortField};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Storage errors are returned exactly as the database layer reports them.
pub type DbResult<T> = Result<T, DbErr>;

/// User repository trait for dependency injection.
///
/// Lookups that miss return `Ok(None)` rather than an error. Deletes report
/// whether a row was removed.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find the user whose username equals `username` exactly
    async fn find_by_username(&self, username: &str) -> DbResult<Option<User>>;

    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> DbResult<Option<User>>;

    /// List every user, ordered by `sort` (ID ascending when `None`)
    async fn find_all(&self, sort: Option<Sort>) -> DbResult<Vec<User>>;

    /// Fetch one page of users together with the total count
    async fn find_page(&self, request: PageRequest) -> DbResult<Page<User>>;

    /// Count all users
    async fn count(&self) -> DbResult<u64>;

    /// Insert a new user; the returned entity carries the generated ID
    async fn create(&self, user: NewUser) -> DbResult<User>;

    /// Persist every mutable field of an existing user
    async fn update(&self, user: User) -> DbResult<User>;

    /// Delete user by ID
    async fn delete_by_id(&self, id: i64) -> DbResult<bool>;

    /// Delete the given user
    async fn delete(&self, user: &User) -> DbResult<bool>;
}

/// SeaORM-backed implementation of [`UserRepository`].
#[derive(Clone)]
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

/// Apply the requested ordering. Non-unique sort keys get ID as a tiebreaker
/// so that page boundaries are stable.
fn ordered(query: Select<UserEntity>, sort: Option<Sort>) -> Select<UserEntity> {
    let sort = sort.unwrap_or_default();
    let column = user::Column::from(sort.field);

    let query = match sort.direction {
        SortDirection::Asc => query.order_by_asc(column),
        SortDirection::Desc => query.order_by_desc(column),
    };
    if sort.field == UserSortField::Id {
        query
    } else {
        query.order_by_asc(user::Column::Id)
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_username(&self, username: &str) -> DbResult<Option<User>> {
        tracing::debug!(username, "Looking up user by username");

        // `one` adds LIMIT 1; the unique index on username keeps this unambiguous.
        let result = UserEntity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await?;

        Ok(result.map(User::from))
    }

    async fn find_by_id(&self, id: i64) -> DbResult<Option<User>> {
        let result = UserEntity::find_by_id(id).one(&self.db).await?;

        Ok(result.map(User::from))
    }

    async fn find_all(&self, sort: Option<Sort>) -> DbResult<Vec<User>> {
        let models = ordered(UserEntity::find(), sort).all(&self.db).await?;

        Ok(models.into_iter().map(User::from).collect())
    }

    async fn find_page(&self, request: PageRequest) -> DbResult<Page<User>> {
        let per_page = request.limit();
        let index = request.index();

        let paginator = ordered(UserEntity::find(), request.sort).paginate(&self.db, per_page);
        let total = paginator.num_items().await?;
        let models = paginator.fetch_page(index).await?;

        tracing::debug!(page = index + 1, per_page, total, "Fetched user page");

        Ok(Page::new(
            models.into_iter().map(User::from).collect(),
            index + 1,
            per_page,
            total,
        ))
    }

    async fn count(&self) -> DbResult<u64> {
        UserEntity::find().count(&self.db).await
    }

    async fn create(&self, user: NewUser) -> DbResult<User> {
        let now = Utc::now();
        let active_model = ActiveModel {
            id: ActiveValue::NotSet,
            username: ActiveValue::Set(user.username),
            password_hash: ActiveValue::Set(user.password_hash),
            role: ActiveValue::Set(user.role.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        };

        let model = active_model.insert(&self.db).await?;
        tracing::debug!(id = model.id, "Created user");

        Ok(User::from(model))
    }

    async fn update(&self, user: User) -> DbResult<User> {
        let active_model = ActiveModel {
            id: ActiveValue::Unchanged(user.id),
            username: ActiveValue::Set(user.username),
            password_hash: ActiveValue::Set(user.password_hash),
            role: ActiveValue::Set(user.role.to_string()),
            created_at: ActiveValue::Unchanged(user.created_at),
            updated_at: ActiveValue::Set(Utc::now()),
        };

        // A missing row surfaces as the ORM's own "not updated" error.
        let model = active_model.update(&self.db).await?;
        tracing::debug!(id = model.id, "Updated user");

        Ok(User::from(model))
    }

    async fn delete_by_id(&self, id: i64) -> DbResult<bool> {
        let result = UserEntity::delete_by_id(id).exec(&self.db).await?;
        tracing::debug!(id, rows = result.rows_affected, "Deleted user");

        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, user: &User) -> DbResult<bool> {
        self.delete_by_id(user.id).await
    }
}

//! User repository - credential and identity persistence.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet, QueryFilter,
    Set, SqlErr,
};
use thiserror::Error;

use super::entities::user::{self, ActiveModel, Entity as UserEntity};
use crate::domain::{NewUser, User};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Why a user insert failed.
#[derive(Debug, Error)]
pub enum CreateUserError {
    /// The unique key on `email` rejected the row.
    #[error("Email already registered")]
    DuplicateEmail,

    #[error(transparent)]
    Storage(DbErr),
}

impl CreateUserError {
    /// Classify a failed insert by the SQL error it carries.
    pub fn from_db(error: DbErr) -> Self {
        Self::classify(error.sql_err(), error)
    }

    fn classify(kind: Option<SqlErr>, error: DbErr) -> Self {
        match kind {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::DuplicateEmail,
            _ => Self::Storage(error),
        }
    }
}

/// User repository trait for dependency injection.
///
/// Lookups return `Ok(None)` when no row matches; `Err` always means the
/// store itself failed.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by email address
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr>;

    /// Find user by ID
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DbErr>;

    /// Insert a new user and return it with its assigned id
    async fn create(&self, user: NewUser) -> Result<User, CreateUserError>;
}

/// SeaORM implementation of UserRepository
pub struct UserStore {
    db: Arc<DatabaseConnection>,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&*self.db)
            .await?;

        Ok(result.map(User::from))
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DbErr> {
        let result = UserEntity::find_by_id(id).one(&*self.db).await?;

        Ok(result.map(User::from))
    }

    async fn create(&self, user: NewUser) -> Result<User, CreateUserError> {
        let active_model = ActiveModel {
            id: NotSet,
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            email: Set(user.email),
            password_hash: Set(user.password_hash),
            created_at: Set(chrono::Utc::now()),
        };

        let model = active_model
            .insert(&*self.db)
            .await
            .map_err(CreateUserError::from_db)?;
        Ok(User::from(model))
    }
}

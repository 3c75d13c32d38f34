//! PostgreSQL user store implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbConn, EntityTrait, QueryFilter, SqlErr};

use enroll_core::domain::User;
use enroll_core::error::StoreError;
use enroll_core::ports::UserStore;

use super::entity::user::{self, Entity as UserEntity};

/// PostgreSQL user store.
///
/// The `users` table carries a unique index on `email`; a violation of that
/// index is surfaced as [`StoreError::Conflict`], which makes this store the
/// authoritative duplicate detector even under concurrent inserts.
pub struct PostgresUserStore {
    db: DbConn,
}

impl PostgresUserStore {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        tracing::debug!(user_email = %mask_email(email), "Finding user by email");

        let result = UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(|e| StoreError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, StoreError> {
        tracing::debug!(user_email = %mask_email(email), "Creating user");

        let user = User::new(email.to_string(), password_hash.to_string());
        let active: user::ActiveModel = user.into();

        let model = active.insert(&self.db).await.map_err(|e| {
            if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) {
                StoreError::Conflict
            } else {
                StoreError::Query(e.to_string())
            }
        })?;

        Ok(model.into())
    }
}

/// Mask an email's local part so logs carry no PII.
fn mask_email(email: &str) -> String {
    if let Some(at_pos) = email.find('@') {
        let (local, domain) = email.split_at(at_pos);
        let masked_local = if local.len() > 1 {
            format!("{}***", &local[..1])
        } else {
            "***".to_string()
        };
        format!("{}{}", masked_local, domain)
    } else {
        "***".to_string()
    }
}

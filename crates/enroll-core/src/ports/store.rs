use async_trait::async_trait;

use crate::domain::User;
use crate::error::StoreError;

/// User store gateway.
///
/// The store owns id and timestamp assignment and enforces email uniqueness
/// at the storage layer. The uniqueness constraint, not the caller's
/// pre-check, is the authoritative duplicate detector: `create_user` must
/// fail with [`StoreError::Conflict`] when a concurrent writer already
/// created a user with the same email.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by their email address. Absence is `Ok(None)`.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Atomically create a user with the given email and password hash.
    async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, StoreError>;
}

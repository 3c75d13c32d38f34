//! In-memory user store - used as fallback when the database is unavailable.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use enroll_core::domain::User;
use enroll_core::error::StoreError;
use enroll_core::ports::UserStore;

/// In-memory user store using a HashMap keyed by email with an async RwLock.
///
/// The duplicate check and the insert happen under one write lock, so the
/// uniqueness guarantee holds under concurrent creates just as the unique
/// index does in Postgres. Data is lost on process restart.
pub struct InMemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.get(email).cloned())
    }

    async fn create_user(&self, email: &str, password_hash: &str) -> Result<User, StoreError> {
        let mut users = self.users.write().await;

        if users.contains_key(email) {
            return Err(StoreError::Conflict);
        }

        let user = User::new(email.to_string(), password_hash.to_string());
        users.insert(email.to_string(), user.clone());
        Ok(user)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use enroll_core::ports::{AuthError, PasswordService};
    use enroll_core::{RegistrationError, RegistrationService};

    use super::*;

    #[tokio::test]
    async fn absent_email_is_not_an_error() {
        let store = InMemoryUserStore::new();
        assert!(store.find_by_email("a@b.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn second_create_for_same_email_conflicts() {
        let store = InMemoryUserStore::new();

        let first = store.create_user("a@b.com", "hash-1").await.unwrap();
        let err = store.create_user("a@b.com", "hash-2").await.unwrap_err();

        assert!(matches!(err, StoreError::Conflict));

        // The winner's row is untouched by the losing write.
        let stored = store.find_by_email("a@b.com").await.unwrap().unwrap();
        assert_eq!(stored.id, first.id);
        assert_eq!(stored.password_hash, "hash-1");
    }

    // Hashing cost is irrelevant to the race below.
    struct PlainHasher;

    impl PasswordService for PlainHasher {
        fn hash(&self, _password: &str) -> Result<String, AuthError> {
            Ok("$fast$hash".to_string())
        }

        fn verify(&self, _: &str, hash: &str) -> Result<bool, AuthError> {
            Ok(hash == "$fast$hash")
        }
    }

    #[tokio::test]
    async fn concurrent_registrations_yield_one_winner() {
        let store = Arc::new(InMemoryUserStore::new());
        let service = Arc::new(RegistrationService::new(store.clone(), Arc::new(PlainHasher)));

        let left = {
            let service = service.clone();
            tokio::spawn(async move { service.register("race@example.com", "Strong1!").await })
        };
        let right = {
            let service = service.clone();
            tokio::spawn(async move { service.register("race@example.com", "Strong1!").await })
        };

        let outcomes = [left.await.unwrap(), right.await.unwrap()];

        let winners = outcomes.iter().filter(|o| o.is_ok()).count();
        let duplicates = outcomes
            .iter()
            .filter(|o| matches!(o, Err(RegistrationError::DuplicateEmail)))
            .count();
        assert_eq!(winners + duplicates, 2);
        assert_eq!(winners, 1, "exactly one request may win the insert");

        // Exactly one stored user, and it is the winner's.
        let winner = outcomes
            .iter()
            .find_map(|o| o.as_ref().ok())
            .expect("one success");
        let stored = store.find_by_email("race@example.com").await.unwrap().unwrap();
        assert_eq!(stored.id, winner.id);
    }
}

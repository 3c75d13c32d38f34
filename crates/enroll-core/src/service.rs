//! Registration service - orchestrates validation, duplicate detection,
//! hashing and persistence, and owns the outcome taxonomy.

use std::sync::Arc;

use crate::domain::UserResponse;
use crate::error::{RegistrationError, StoreError};
use crate::ports::{PasswordService, UserStore};
use crate::validation;

/// User registration service.
///
/// Stateless per request; collaborators are injected so tests can substitute
/// them deterministically. Every collaborator failure is translated into one
/// of the [`RegistrationError`] variants before it crosses this boundary -
/// raw store or hasher errors never escape.
pub struct RegistrationService {
    store: Arc<dyn UserStore>,
    passwords: Arc<dyn PasswordService>,
}

impl RegistrationService {
    pub fn new(store: Arc<dyn UserStore>, passwords: Arc<dyn PasswordService>) -> Self {
        Self { store, passwords }
    }

    /// Register a new user.
    ///
    /// Performs exactly one store mutation on success and none on any
    /// failure path. The pre-check lookup is an optimization to skip
    /// hashing work for obvious duplicates; the store's uniqueness
    /// constraint is what actually decides duplicates, so a `Conflict`
    /// from `create_user` maps to the same outcome as a pre-check hit.
    pub async fn register(
        &self,
        email: &str,
        password: &str,
    ) -> Result<UserResponse, RegistrationError> {
        let creds =
            validation::validate(email, password).map_err(RegistrationError::Validation)?;

        match self.store.find_by_email(creds.email()).await {
            Ok(Some(_)) => return Err(RegistrationError::DuplicateEmail),
            Ok(None) => {}
            Err(e) => {
                tracing::error!(error = %e, "duplicate pre-check failed");
                return Err(RegistrationError::Storage);
            }
        }

        let password_hash = self.passwords.hash(creds.password()).map_err(|e| {
            tracing::error!(error = %e, "password hashing failed");
            RegistrationError::Storage
        })?;

        let user = match self.store.create_user(creds.email(), &password_hash).await {
            Ok(user) => user,
            Err(StoreError::Conflict) => return Err(RegistrationError::DuplicateEmail),
            Err(e) => {
                tracing::error!(error = %e, "user creation failed");
                return Err(RegistrationError::Storage);
            }
        };

        Ok(UserResponse::from(user))
    }
}

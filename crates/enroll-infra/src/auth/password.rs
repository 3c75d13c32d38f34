//! Argon2 password hashing implementation.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use enroll_core::ports::{AuthError, PasswordService};

/// Work factor configuration for Argon2id.
///
/// The defaults land the per-hash cost in the same hundreds-of-milliseconds
/// band as bcrypt at cost 12 on current server hardware.
#[derive(Debug, Clone)]
pub struct Argon2Config {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for Argon2Config {
    fn default() -> Self {
        Self {
            memory_kib: 19_456,
            iterations: 2,
            parallelism: 1,
        }
    }
}

impl Argon2Config {
    /// Load the work factor from `ARGON2_MEMORY_KIB`, `ARGON2_ITERATIONS`
    /// and `ARGON2_PARALLELISM`, falling back to defaults per variable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            memory_kib: env_u32("ARGON2_MEMORY_KIB").unwrap_or(defaults.memory_kib),
            iterations: env_u32("ARGON2_ITERATIONS").unwrap_or(defaults.iterations),
            parallelism: env_u32("ARGON2_PARALLELISM").unwrap_or(defaults.parallelism),
        }
    }
}

fn env_u32(key: &str) -> Option<u32> {
    std::env::var(key).ok().and_then(|s| s.parse().ok())
}

/// Argon2id-based password service.
///
/// Each hash uses a fresh random salt and is emitted as a PHC string, so the
/// output embeds algorithm, parameters and salt and verification needs
/// nothing stored alongside it.
pub struct Argon2PasswordService {
    argon2: Argon2<'static>,
}

impl Argon2PasswordService {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }

    /// Build a service with an explicit work factor.
    pub fn with_config(config: &Argon2Config) -> Result<Self, AuthError> {
        let params = Params::new(
            config.memory_kib,
            config.iterations,
            config.parallelism,
            None,
        )
        .map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Build from environment configuration, keeping the default work
    /// factor when the configured values are out of range.
    pub fn from_env() -> Self {
        let config = Argon2Config::from_env();
        match Self::with_config(&config) {
            Ok(service) => service,
            Err(e) => {
                tracing::warn!(error = %e, "invalid Argon2 configuration, using defaults");
                Self::new()
            }
        }
    }
}

impl Default for Argon2PasswordService {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordService for Argon2PasswordService {
    fn hash(&self, password: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AuthError::HashingError(e.to_string()))
    }

    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(self
            .argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Cheap parameters - these tests exercise correctness, not cost.
    fn fast_service() -> Argon2PasswordService {
        Argon2PasswordService::with_config(&Argon2Config {
            memory_kib: 1024,
            iterations: 1,
            parallelism: 1,
        })
        .unwrap()
    }

    #[test]
    fn test_hash_and_verify() {
        let service = fast_service();
        let password = "Correct-horse1!";

        let hash = service.hash(password).unwrap();
        assert!(service.verify(password, &hash).unwrap());
        assert!(!service.verify("wrong_password", &hash).unwrap());
    }

    #[test]
    fn repeated_hashes_differ_but_both_verify() {
        let service = fast_service();
        let password = "Strong1!";

        let first = service.hash(password).unwrap();
        let second = service.hash(password).unwrap();

        assert_ne!(first, second);
        assert!(service.verify(password, &first).unwrap());
        assert!(service.verify(password, &second).unwrap());
    }

    #[test]
    fn hash_is_self_describing() {
        let service = fast_service();
        let hash = service.hash("Strong1!").unwrap();

        // PHC string: algorithm id and parameters are embedded.
        assert!(hash.starts_with("$argon2id$"));
        assert!(hash.contains("m=1024"));
        assert!(!hash.contains("Strong1!"));
    }

    #[test]
    fn rejects_out_of_range_work_factor() {
        let result = Argon2PasswordService::with_config(&Argon2Config {
            memory_kib: 1,
            iterations: 0,
            parallelism: 0,
        });
        assert!(result.is_err());
    }
}

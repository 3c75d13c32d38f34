//! Authentication ports - password hashing and token issuance.

use uuid::Uuid;

/// Password hashing service.
///
/// Implementations must use a slow, salted, one-way algorithm whose output
/// is self-describing (embeds algorithm, parameters, and salt), so that
/// `verify` needs nothing beyond the stored hash string. Swapping the
/// concrete algorithm must not touch callers.
pub trait PasswordService: Send + Sync {
    /// Hash a plain text password. Each call salts independently, so two
    /// hashes of the same password differ.
    fn hash(&self, password: &str) -> Result<String, AuthError>;

    /// Verify a password against a previously produced hash.
    ///
    /// Registration never calls this; the login flow will.
    fn verify(&self, password: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Session token issuance, supplied by the transport layer.
///
/// The registration core never sees tokens; the HTTP adapter issues one for
/// the created user when shaping the response.
pub trait TokenIssuer: Send + Sync {
    /// Issue an opaque session token for a user.
    fn issue(&self, user_id: Uuid, email: &str) -> Result<String, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Hashing error: {0}")]
    HashingError(String),

    #[error("Token issuance failed: {0}")]
    TokenIssuance(String),
}

//! Domain-level error types.

use thiserror::Error;

/// User store errors.
///
/// "Not found" is not an error for this store - lookups return `Ok(None)`.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A uniqueness constraint rejected the write (concurrent creator won).
    #[error("Unique constraint conflict")]
    Conflict,

    #[error("Database connection failed: {0}")]
    Connection(String),

    #[error("Query execution failed: {0}")]
    Query(String),
}

/// Registration outcomes that are not a created user.
///
/// Together with the `Ok` arm this is the complete, closed set of results a
/// registration can produce - adapters match on it exhaustively.
#[derive(Debug, Error)]
pub enum RegistrationError {
    /// Input failed one or more credential rules. Carries a message for
    /// every violated rule, not just the first.
    #[error("Validation failed")]
    Validation(Vec<String>),

    /// The email already belongs to an account, whether detected by the
    /// pre-check or by the store's uniqueness constraint.
    #[error("Email already registered")]
    DuplicateEmail,

    /// An internal collaborator failed. The cause is logged server-side;
    /// callers only ever see this opaque variant.
    #[error("Storage failure")]
    Storage,
}

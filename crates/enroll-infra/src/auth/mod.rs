//! Authentication implementations: Argon2 hashing and JWT issuance.

mod jwt;
mod password;

pub use jwt::{JwtConfig, JwtTokenIssuer};
pub use password::{Argon2Config, Argon2PasswordService};

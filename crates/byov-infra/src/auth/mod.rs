//! Authentication implementations.

mod jwt;
mod password;
mod provider;

pub use jwt::{JwtConfig, JwtTokenService};
pub use password::Argon2PasswordService;
pub use provider::JwtAuthProvider;

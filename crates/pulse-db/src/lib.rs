pub mod error;
pub mod repositories;

pub use error::{DbError, Result};
pub use repositories::refresh_token_repository::RefreshTokenRepository;
pub use repositories::user_repository::UserRepository;

#[cfg(test)]
mod tests;

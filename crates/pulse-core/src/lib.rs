pub mod error;
pub mod models;

pub use error::{CoreError, Result};
pub use models::refresh_token::RefreshToken;
pub use models::token_pair::TokenPair;
pub use models::user::User;

pub use error_location::ErrorLocation;

#[cfg(test)]
mod tests;

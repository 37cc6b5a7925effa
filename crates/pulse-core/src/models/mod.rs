pub mod refresh_token;
pub mod token_pair;
pub mod user;

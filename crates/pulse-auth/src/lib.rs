pub mod claims;
pub mod counter_store;
pub mod error;
pub mod fixed_window_limiter;
pub mod jwt_validator;
pub mod rate_limit_config;
pub mod redis_counter_store;
pub mod refresh_value;
pub mod token_signer;

pub use claims::Claims;
pub use counter_store::{CounterStore, InMemoryCounterStore};
pub use error::{AuthError, Result};
pub use fixed_window_limiter::FixedWindowLimiter;
pub use jwt_validator::JwtValidator;
pub use rate_limit_config::RateLimitConfig;
pub use redis_counter_store::RedisCounterStore;
pub use refresh_value::generate_refresh_value;
pub use token_signer::TokenSigner;

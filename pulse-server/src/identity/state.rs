use crate::TokenService;

use pulse_auth::FixedWindowLimiter;

use sqlx::SqlitePool;

/// Shared state for the identity router.
#[derive(Clone)]
pub struct IdentityState {
    pub pool: SqlitePool,
    pub tokens: TokenService,
    /// 1 s tier counted on every route
    pub ingress_limiter: FixedWindowLimiter,
    /// 15 min tier counted additionally on register and login
    pub sensitive_limiter: FixedWindowLimiter,
}

pub mod admission;
pub mod api;
pub mod error;
pub mod gateway;
pub mod health;
pub mod identity;
pub mod logger;

#[cfg(test)]
mod tests;

pub use api::{
    error::{ApiError, Result as ApiResult},
    message_response::MessageResponse,
};

pub use gateway::{
    routes::build_gateway_router,
    route_table::{Route, RouteTable},
    state::GatewayState,
};

pub use identity::{
    login_request::LoginRequest,
    login_response::LoginResponse,
    refresh_token_request::RefreshTokenRequest,
    refresh_token_response::RefreshTokenResponse,
    register_request::RegisterRequest,
    routes::build_identity_router,
    state::IdentityState,
    token_response::TokenResponse,
    token_service::TokenService,
};

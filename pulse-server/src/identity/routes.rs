use crate::{IdentityState, admission, health, identity::handlers};

use axum::{Router, middleware::from_fn_with_state, routing::get, routing::post};
use tower_http::cors::{Any, CorsLayer};

/// Build the identity router.
///
/// Register and login carry the sensitive tier on top of the ingress
/// tier every auth route passes; the health probe sits outside both.
pub fn build_identity_router(state: IdentityState) -> Router {
    let sensitive = Router::new()
        .route("/api/auth/register", post(handlers::register))
        .route("/api/auth/login", post(handlers::login))
        .layer(from_fn_with_state(
            state.sensitive_limiter.clone(),
            admission::admit,
        ));

    let open = Router::new()
        .route("/api/auth/refresh-token", post(handlers::refresh_token))
        .route("/api/auth/logout", post(handlers::logout));

    Router::new()
        .merge(sensitive)
        .merge(open)
        .layer(from_fn_with_state(
            state.ingress_limiter.clone(),
            admission::admit,
        ))
        .route("/health", get(health::health))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

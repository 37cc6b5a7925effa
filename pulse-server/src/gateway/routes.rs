use crate::{ApiError, ApiResult, GatewayState, admission, gateway::bearer, gateway::proxy, health};

use pulse_auth::FixedWindowLimiter;

use axum::{
    Router,
    extract::{Request, State},
    middleware::from_fn_with_state,
    response::Response,
    routing::get,
};
use tower_http::cors::{Any, CorsLayer};

/// Build the gateway router.
///
/// Every dispatched request passes the general admission tier first;
/// the health probe sits outside it.
pub fn build_gateway_router(state: GatewayState, general: FixedWindowLimiter) -> Router {
    Router::new()
        .fallback(dispatch)
        .layer(from_fn_with_state(general, admission::admit))
        .route("/health", get(health::health))
        .with_state(state)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
}

/// Dispatch a request to the backend that owns its path prefix.
///
/// Protected prefixes fail closed: no valid bearer token, no backend
/// call. The verified subject travels onward as `x-user-id`.
async fn dispatch(State(state): State<GatewayState>, request: Request) -> ApiResult<Response> {
    let path = request.uri().path();

    let route = state
        .routes
        .resolve(path)
        .ok_or_else(|| ApiError::not_found(format!("No route for {}", path)))?;

    let user_id = if route.requires_auth {
        let token = bearer::bearer_token(request.headers())?;
        let claims = state.validator.validate(token)?;
        Some(claims.sub)
    } else {
        None
    };

    proxy::forward(&state, route, user_id.as_deref(), request).await
}

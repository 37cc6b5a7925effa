use crate::RouteTable;

use pulse_auth::JwtValidator;

use std::sync::Arc;

/// Shared state for the gateway router.
#[derive(Clone)]
pub struct GatewayState {
    pub validator: Arc<JwtValidator>,
    pub client: reqwest::Client,
    pub routes: Arc<RouteTable>,
}

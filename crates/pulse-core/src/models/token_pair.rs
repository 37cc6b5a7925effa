use serde::Serialize;

/// The credential pair returned by every issuing operation: a signed
/// short-lived access token and the opaque persisted refresh value.
#[derive(Debug, Clone, Serialize)]
pub struct TokenPair {
    #[serde(rename = "accessToken")]
    pub access_token: String,
    #[serde(rename = "refreshToken")]
    pub refresh_token: String,
}

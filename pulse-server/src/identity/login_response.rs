use serde::Serialize;
use uuid::Uuid;

/// 200 body for login: the credential pair plus the caller's id.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,

    #[serde(rename = "accessToken")]
    pub access_token: String,

    #[serde(rename = "refreshToken")]
    pub refresh_token: String,

    #[serde(rename = "userId")]
    pub user_id: Uuid,
}

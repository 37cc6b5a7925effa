use crate::{LoginRequest, RefreshTokenRequest, RegisterRequest};

fn register_body() -> RegisterRequest {
    RegisterRequest {
        user_name: "sam".to_string(),
        email: "sam@example.com".to_string(),
        password: "hunter22".to_string(),
    }
}

#[test]
fn test_register_request_accepts_well_formed_body() {
    assert!(register_body().validate().is_ok());
}

#[test]
fn test_register_request_rejects_short_password() {
    let body = RegisterRequest {
        password: "abc".to_string(),
        ..register_body()
    };

    assert!(body.validate().is_err());
}

#[test]
fn test_register_request_rejects_malformed_email() {
    let body = RegisterRequest {
        email: "not-an-email".to_string(),
        ..register_body()
    };

    assert!(body.validate().is_err());
}

#[test]
fn test_register_request_rejects_short_user_name() {
    let body = RegisterRequest {
        user_name: "ab".to_string(),
        ..register_body()
    };

    assert!(body.validate().is_err());
}

#[test]
fn test_login_request_requires_both_fields() {
    let body = LoginRequest {
        email: "sam@example.com".to_string(),
        password: String::new(),
    };

    assert!(body.validate().is_err());
}

#[test]
fn test_refresh_request_rejects_missing_token() {
    let body = RefreshTokenRequest {
        refresh_token: String::new(),
    };

    assert!(body.validate().is_err());
}

#[test]
fn test_refresh_request_deserializes_camel_case() {
    let body: RefreshTokenRequest =
        serde_json::from_str(r#"{"refreshToken": "abc123"}"#).unwrap();

    assert_eq!(body.refresh_token, "abc123");
}

#[test]
fn test_refresh_request_tolerates_absent_field() {
    // The field defaults to empty so validate() can answer with the
    // domain message instead of a serde 422
    let body: RefreshTokenRequest = serde_json::from_str("{}").unwrap();

    assert!(body.validate().is_err());
}

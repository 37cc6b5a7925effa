use crate::{CoreError, User};

#[test]
fn given_well_formed_user_name_when_validated_then_ok() {
    assert!(User::validate_user_name("sam").is_ok());
    assert!(User::validate_user_name("a-longer-name").is_ok());
}

#[test]
fn given_short_user_name_when_validated_then_rejected() {
    let result = User::validate_user_name("ab");

    assert!(matches!(result, Err(CoreError::InvalidUserName { .. })));
}

#[test]
fn given_padded_user_name_when_validated_then_rejected() {
    let result = User::validate_user_name(" sam ");

    assert!(matches!(result, Err(CoreError::InvalidUserName { .. })));
}

#[test]
fn given_well_formed_email_when_validated_then_ok() {
    assert!(User::validate_email("sam@example.com").is_ok());
}

#[test]
fn given_email_without_at_sign_when_validated_then_rejected() {
    let result = User::validate_email("sam.example.com");

    assert!(matches!(result, Err(CoreError::InvalidEmail { .. })));
}

#[test]
fn given_email_with_empty_local_part_when_validated_then_rejected() {
    let result = User::validate_email("@example.com");

    assert!(matches!(result, Err(CoreError::InvalidEmail { .. })));
}

#[test]
fn given_new_user_when_created_then_password_hash_not_serialized() {
    let user = User::new(
        "sam".to_string(),
        "sam@example.com".to_string(),
        "$2b$12$hash".to_string(),
    );

    let json = serde_json::to_string(&user).unwrap();

    assert!(!json.contains("password_hash"));
    assert!(!json.contains("$2b$12$hash"));
}

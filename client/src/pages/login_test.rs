use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  admin@x.com ", "secret"),
        Ok(LoginRequest { email: "admin@x.com".to_owned(), password: "secret".to_owned() })
    );
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    let request = validate_login_input("a@b.com", " pw ").expect("valid");
    assert_eq!(request.password, " pw ");
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("", "pw"), Err(MISSING_CREDENTIALS_MESSAGE));
    assert_eq!(validate_login_input("   ", "pw"), Err(MISSING_CREDENTIALS_MESSAGE));
    assert_eq!(validate_login_input("a@b.com", ""), Err(MISSING_CREDENTIALS_MESSAGE));
}

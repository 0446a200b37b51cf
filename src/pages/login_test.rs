use super::*;

#[test]
fn validate_login_input_trims_email() {
    assert_eq!(
        validate_login_input("  test@example.com ", "123456"),
        Ok(Credentials { email: "test@example.com".to_owned(), password: "123456".to_owned() })
    );
}

#[test]
fn validate_login_input_requires_both_fields() {
    assert_eq!(validate_login_input("   ", "123456"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("a@b.com", ""), Err("Enter both email and password."));
}

#[test]
fn validate_login_input_keeps_password_whitespace() {
    let credentials = validate_login_input("a@b.com", " pass ").unwrap();
    assert_eq!(credentials.password, " pass ");
}

use super::*;

fn form() -> RegisterForm {
    RegisterForm {
        name: " Asha ".to_owned(),
        email: "asha@example.com".to_owned(),
        phone: String::new(),
        password: "secret1".to_owned(),
        confirm: "secret1".to_owned(),
    }
}

#[test]
fn valid_form_builds_registration() {
    let registration = validate_registration(&form()).unwrap();
    assert_eq!(registration.name, "Asha");
    assert_eq!(registration.phone, None);
    assert_eq!(registration.role, None);
}

#[test]
fn phone_is_kept_when_given() {
    let registration = validate_registration(&RegisterForm { phone: " 98765 ".to_owned(), ..form() }).unwrap();
    assert_eq!(registration.phone.as_deref(), Some("98765"));
}

#[test]
fn required_fields_are_enforced() {
    let err = validate_registration(&RegisterForm { name: "  ".to_owned(), ..form() });
    assert_eq!(err, Err("Please fill in all required fields."));
}

#[test]
fn short_password_is_rejected() {
    let err = validate_registration(&RegisterForm { password: "abc".to_owned(), confirm: "abc".to_owned(), ..form() });
    assert_eq!(err, Err("Password must be at least 6 characters."));
}

#[test]
fn mismatched_confirmation_is_rejected() {
    let err = validate_registration(&RegisterForm { confirm: "secret2".to_owned(), ..form() });
    assert_eq!(err, Err("Passwords do not match."));
}

use super::*;

fn current() -> ProfileForm {
    ProfileForm {
        name: "Test".to_owned(),
        email: "test@example.com".to_owned(),
        phone: String::new(),
        bio: String::new(),
    }
}

#[test]
fn unchanged_form_has_nothing_to_update() {
    assert_eq!(build_profile_patch(&current(), &current()), Err("Nothing to update."));
}

#[test]
fn only_changed_fields_are_sent() {
    let edited = ProfileForm { name: " Test Two ".to_owned(), bio: "hello".to_owned(), ..current() };
    let patch = build_profile_patch(&current(), &edited).unwrap();
    assert_eq!(
        patch,
        ProfilePatch { name: Some("Test Two".to_owned()), bio: Some("hello".to_owned()), ..ProfilePatch::default() }
    );
}

#[test]
fn blanked_fields_are_not_cleared() {
    let edited = ProfileForm { email: "  ".to_owned(), ..current() };
    assert_eq!(build_profile_patch(&current(), &edited), Err("Nothing to update."));
}

#[test]
fn form_reads_optional_fields_from_profile_extras() {
    let user: UserProfile = serde_json::from_value(serde_json::json!({
        "name": "Asha",
        "email": "asha@example.com",
        "phone": "98765",
        "bio": 42
    }))
    .unwrap();
    let form = ProfileForm::from_user(&user);
    assert_eq!(form.phone, "98765");
    assert_eq!(form.bio, "");
}

//! Account registration page.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::Registration;
use crate::routes::{HOME_PATH, LOGIN_PATH};
use crate::state::auth::SessionContext;

const MIN_PASSWORD_LEN: usize = 6;

/// Raw registration form values.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct RegisterForm {
    name: String,
    email: String,
    phone: String,
    password: String,
    confirm: String,
}

fn validate_registration(form: &RegisterForm) -> Result<Registration, &'static str> {
    let name = form.name.trim();
    let email = form.email.trim();
    if name.is_empty() || email.is_empty() || form.password.is_empty() {
        return Err("Please fill in all required fields.");
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err("Password must be at least 6 characters.");
    }
    if form.password != form.confirm {
        return Err("Passwords do not match.");
    }
    let phone = form.phone.trim();
    Ok(Registration {
        name: name.to_owned(),
        email: email.to_owned(),
        password: form.password.clone(),
        phone: (!phone.is_empty()).then(|| phone.to_owned()),
        role: None,
    })
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let navigate = use_navigate();
    let form = RwSignal::new(RegisterForm::default());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let registration = match form.with(validate_registration) {
            Ok(registration) => registration,
            Err(message) => {
                error.set(message.to_owned());
                return;
            }
        };
        error.set(String::new());
        busy.set(true);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            match session.register(registration).await {
                Ok(_) => navigate(HOME_PATH, NavigateOptions::default()),
                Err(e) => error.set(e.to_string()),
            }
            busy.set(false);
        });
    };

    let field = move |label: &'static str, kind: &'static str, get: fn(&RegisterForm) -> String, set: fn(&mut RegisterForm, String)| {
        view! {
            <label>{label}</label>
            <input
                type=kind
                prop:value=move || form.with(get)
                on:input=move |ev| form.update(|f| set(f, event_target_value(&ev)))
            />
        }
    };

    view! {
        <div class="auth-page">
            <div class="auth-card">
                <h2>"Create your account"</h2>
                <Show when=move || !error.get().is_empty()>
                    <div class="status-message status-message--error">{move || error.get()}</div>
                </Show>
                <form class="auth-form" on:submit=on_submit>
                    {field("Full Name", "text", |f| f.name.clone(), |f, v| f.name = v)}
                    {field("Email Address", "email", |f| f.email.clone(), |f, v| f.email = v)}
                    {field("Phone (optional)", "tel", |f| f.phone.clone(), |f, v| f.phone = v)}
                    {field("Password", "password", |f| f.password.clone(), |f, v| f.password = v)}
                    {field("Confirm Password", "password", |f| f.confirm.clone(), |f, v| f.confirm = v)}
                    <button class="btn btn--block" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Creating account..." } else { "Sign up" }}
                    </button>
                </form>
                <p class="auth-card__footer">"Already registered? " <a href=LOGIN_PATH>"Login"</a></p>
            </div>
        </div>
    }
}

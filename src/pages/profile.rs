//! Account page: view and edit the logged-in user's profile.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::net::types::{ProfilePatch, UserProfile};
use crate::state::auth::SessionContext;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct ProfileForm {
    name: String,
    email: String,
    phone: String,
    bio: String,
}

impl ProfileForm {
    fn from_user(user: &UserProfile) -> Self {
        let extra = |key: &str| user.extra.get(key).and_then(|v| v.as_str()).unwrap_or_default().to_owned();
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            phone: extra("phone"),
            bio: extra("bio"),
        }
    }
}

/// Only fields that are non-blank and differ from the current profile.
fn build_profile_patch(current: &ProfileForm, edited: &ProfileForm) -> Result<ProfilePatch, &'static str> {
    let changed = |now: &str, new: &str| {
        let new = new.trim();
        (!new.is_empty() && new != now).then(|| new.to_owned())
    };
    let patch = ProfilePatch {
        name: changed(&current.name, &edited.name),
        email: changed(&current.email, &edited.email),
        phone: changed(&current.phone, &edited.phone),
        bio: changed(&current.bio, &edited.bio),
    };
    if patch.is_empty() {
        return Err("Nothing to update.");
    }
    Ok(patch)
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let current = Memo::new(move |_| session.with(|s| s.user().map(ProfileForm::from_user).unwrap_or_default()));
    let form = RwSignal::new(current.get_untracked());
    let notice = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let patch = match build_profile_patch(&current.get_untracked(), &form.get_untracked()) {
            Ok(patch) => patch,
            Err(message) => {
                notice.set(message.to_owned());
                return;
            }
        };
        busy.set(true);
        leptos::task::spawn_local(async move {
            match session.update_user(patch).await {
                Ok(user) => {
                    form.set(ProfileForm::from_user(&user));
                    notice.set("Profile updated.".to_owned());
                }
                Err(e) => notice.set(e.to_string()),
            }
            busy.set(false);
        });
    };

    let role = move || session.with(|s| s.role().map(ToString::to_string).unwrap_or_default());

    view! {
        <div class="profile-page">
            <h1>"My Profile"</h1>
            <p class="profile-role">"Role: " {role}</p>
            <form class="auth-form" on:submit=on_submit>
                <label>"Name"</label>
                <input
                    type="text"
                    prop:value=move || form.with(|f| f.name.clone())
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
                <label>"Email"</label>
                <input
                    type="email"
                    prop:value=move || form.with(|f| f.email.clone())
                    on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                />
                <label>"Phone"</label>
                <input
                    type="tel"
                    prop:value=move || form.with(|f| f.phone.clone())
                    on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                />
                <label>"Bio"</label>
                <textarea
                    prop:value=move || form.with(|f| f.bio.clone())
                    on:input=move |ev| form.update(|f| f.bio = event_target_value(&ev))
                ></textarea>
                <button class="btn" type="submit" disabled=move || busy.get()>"Save changes"</button>
            </form>
            <Show when=move || !notice.get().is_empty()>
                <p class="form-notice">{move || notice.get()}</p>
            </Show>
            <button class="btn btn--ghost" on:click=move |_| session.logout()>"Logout"</button>
        </div>
    }
}

//! Account-creation screen. A successful registration signs the new
//! user straight in, same redirect as login.

use leptos::prelude::*;

use crate::state::session::SessionState;

const PASSWORD_PLACEHOLDER: &str =
    "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}";

const MIN_PASSWORD_CHARS: usize = 6;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        error.set(String::new());

        let name_value = name.get().trim().to_owned();
        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if let Err(reason) = validate_register_input(&name_value, &email_value, &password_value) {
            error.set(reason.to_owned());
            return;
        }

        #[cfg(feature = "csr")]
        {
            busy.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&name_value, &email_value, &password_value).await {
                    Ok(auth) => {
                        crate::state::session::login(session, &auth.token, &auth.user);
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/dashboard");
                        }
                    }
                    Err(err) => {
                        error.set(err.display_message("Registration failed"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (session, name_value, email_value, password_value);
        }
    };

    view! {
        <div class="auth-screen">
            <div class="auth-card">
                <div class="auth-card__header">
                    <h1 class="auth-card__brand">"FinHealthTracker"</h1>
                    <p class="auth-card__tagline">"Create your account"</p>
                </div>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-card__error">{move || error.get()}</p>
                </Show>
                <form class="auth-card__form" on:submit=on_submit>
                    <label class="field">
                        <span class="field__label">"Full Name"</span>
                        <input
                            type="text"
                            class="field__input"
                            placeholder="Dana Rivers"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                            required=true
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Email Address"</span>
                        <input
                            type="email"
                            class="field__input"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                            required=true
                        />
                    </label>
                    <label class="field">
                        <span class="field__label">"Password"</span>
                        <input
                            type="password"
                            class="field__input"
                            placeholder=PASSWORD_PLACEHOLDER
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            required=true
                        />
                    </label>
                    <button
                        type="submit"
                        class="btn btn--primary auth-card__submit"
                        disabled=move || busy.get()
                    >
                        {move || if busy.get() { "Creating account..." } else { "Create Account" }}
                    </button>
                </form>
                <p class="auth-card__divider">"Already have an account?"</p>
                <a class="btn auth-card__alt" href="/login">
                    "Sign In"
                </a>
            </div>
        </div>
    }
}

fn validate_register_input(name: &str, email: &str, password: &str) -> Result<(), &'static str> {
    if name.is_empty() {
        return Err("Name is required");
    }
    if email.is_empty() {
        return Err("Email is required");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address");
    }
    if password.chars().count() < MIN_PASSWORD_CHARS {
        return Err("Password must be at least 6 characters");
    }
    Ok(())
}

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

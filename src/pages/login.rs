//! Sign-in screen.
//!
//! Submits credentials, persists the returned session, and hard-
//! redirects into the app so every page starts from freshly restored
//! state. Field state lives in plain signals; there is no form
//! abstraction.

use leptos::prelude::*;

use crate::state::session::SessionState;

const PASSWORD_PLACEHOLDER: &str =
    "\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}\u{2022}";

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
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

        let email_value = email.get().trim().to_owned();
        let password_value = password.get();
        if let Err(reason) = validate_login_input(&email_value, &password_value) {
            error.set(reason.to_owned());
            return;
        }

        #[cfg(feature = "csr")]
        {
            busy.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::login(&email_value, &password_value).await {
                    Ok(auth) => {
                        crate::state::session::login(session, &auth.token, &auth.user);
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/dashboard");
                        }
                    }
                    Err(err) => {
                        error.set(err.display_message("Login failed"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (session, email_value, password_value);
        }
    };

    view! {
        <div class="auth-screen">
            <div class="auth-card">
                <div class="auth-card__header">
                    <h1 class="auth-card__brand">"FinHealthTracker"</h1>
                    <p class="auth-card__tagline">"Smart Financial Management"</p>
                </div>
                <Show when=move || !error.get().is_empty()>
                    <p class="auth-card__error">{move || error.get()}</p>
                </Show>
                <form class="auth-card__form" on:submit=on_submit>
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
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <p class="auth-card__divider">"New to FinHealthTracker?"</p>
                <a class="btn auth-card__alt" href="/register">
                    "Create Account"
                </a>
            </div>
        </div>
    }
}

fn validate_login_input(email: &str, password: &str) -> Result<(), &'static str> {
    if email.is_empty() {
        return Err("Email is required");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address");
    }
    if password.is_empty() {
        return Err("Password is required");
    }
    Ok(())
}

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

//! Route guards keyed off the shared session store.
//!
//! Both guards redirect through an effect so the decision re-runs
//! whenever the session changes, including mid-visit expiry. While the
//! store is still loading neither guard redirects; the stored session
//! must get its chance to restore before anyone is bounced to login.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;

/// Wraps pages that require a signed-in session. Anyone else is sent to
/// the login screen once the session has resolved.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if resolved_signed_out(&session.get()) {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <Show
            when=move || session.get().is_authenticated
            fallback=move || {
                view! {
                    <p class="guard-wait">
                        {move || {
                            if session.get().loading {
                                "Loading..."
                            } else {
                                "Redirecting to login..."
                            }
                        }}
                    </p>
                }
            }
        >
            {children()}
        </Show>
    }
}

/// Wraps the auth screens. A session that resolves signed in is sent to
/// the dashboard instead.
#[component]
pub fn RequireAnon(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();

    Effect::new(move |_| {
        if resolved_signed_in(&session.get()) {
            navigate("/dashboard", NavigateOptions::default());
        }
    });

    view! {
        <Show
            when=move || !session.get().is_authenticated
            fallback=|| view! { <p class="guard-wait">"Redirecting to your dashboard..."</p> }
        >
            {children()}
        </Show>
    }
}

fn resolved_signed_in(state: &SessionState) -> bool {
    !state.loading && state.is_authenticated
}

fn resolved_signed_out(state: &SessionState) -> bool {
    !state.loading && !state.is_authenticated
}

#[cfg(test)]
#[path = "route_guard_test.rs"]
mod route_guard_test;

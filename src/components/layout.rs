//! Signed-in application chrome: collapsible sidebar, top bar with the
//! user's identity, and the routed page content.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::state::session::{self, SessionState};

const NAV_ITEMS: &[(&str, &str, &str)] = &[
    ("/dashboard", "\u{1f4ca}", "Dashboard"),
    ("/transactions", "\u{1f4b3}", "Transactions"),
    ("/budgets", "\u{1f4b0}", "Budgets"),
    ("/goals", "\u{1f3af}", "Goals"),
    ("/insights", "\u{1f4a1}", "Insights"),
];

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let collapsed = RwSignal::new(false);
    let pathname = use_location().pathname;
    let user = move || session.get().user.unwrap_or_default();

    let on_logout = move |_| {
        session::logout(session);
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                let _ = window.location().set_href("/login");
            }
        }
    };

    view! {
        <div class="shell">
            <aside class=move || {
                if collapsed.get() { "sidebar sidebar--collapsed" } else { "sidebar" }
            }>
                <div class="sidebar__brand">
                    <span class="sidebar__logo">"FH"</span>
                    <Show when=move || !collapsed.get()>
                        <span class="sidebar__brand-name">
                            "FinHealth"
                            <small class="sidebar__brand-sub">"Tracker"</small>
                        </span>
                    </Show>
                </div>
                <nav class="sidebar__nav">
                    {NAV_ITEMS
                        .iter()
                        .map(|&(href, glyph, label)| {
                            view! {
                                <a
                                    href=href
                                    class=move || {
                                        if is_active_path(&pathname.get(), href) {
                                            "sidebar__link sidebar__link--active"
                                        } else {
                                            "sidebar__link"
                                        }
                                    }
                                >
                                    <span class="sidebar__glyph">{glyph}</span>
                                    <Show when=move || !collapsed.get()>
                                        <span class="sidebar__label">{label}</span>
                                    </Show>
                                </a>
                            }
                        })
                        .collect_view()}
                </nav>
                <button class="sidebar__logout" on:click=on_logout>
                    <span class="sidebar__glyph">"\u{1f6aa}"</span>
                    <Show when=move || !collapsed.get()>
                        <span class="sidebar__label">"Logout"</span>
                    </Show>
                </button>
            </aside>
            <div class="shell__body">
                <header class="topbar">
                    <button
                        class="topbar__toggle"
                        on:click=move |_| collapsed.update(|value| *value = !*value)
                    >
                        {move || if collapsed.get() { "\u{2630}" } else { "\u{2715}" }}
                    </button>
                    <h2 class="topbar__title">"FinHealthTracker"</h2>
                    <div class="topbar__user">
                        <span class="topbar__avatar">{move || initial_letter(&user().name)}</span>
                        <div class="topbar__identity">
                            <span class="topbar__name">{move || user().name}</span>
                            <span class="topbar__email">{move || user().email}</span>
                        </div>
                    </div>
                </header>
                <main class="shell__content">{children()}</main>
            </div>
        </div>
    }
}

/// Whether a nav entry points at the current page. The dashboard entry
/// also owns the bare root path.
fn is_active_path(current: &str, href: &str) -> bool {
    current == href || (href == "/dashboard" && current == "/")
}

/// Avatar letter for a display name, `?` when the name is blank.
fn initial_letter(name: &str) -> String {
    name.trim()
        .chars()
        .next()
        .map_or_else(|| "?".to_owned(), |first| first.to_uppercase().to_string())
}

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

//! Catch-all screen for unknown routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let on_back = move |_| {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if let Ok(history) = window.history() {
                    let _ = history.back();
                }
            }
        }
    };

    view! {
        <section class="page not-found">
            <p class="not-found__code">"404"</p>
            <h1 class="not-found__title">"Page Not Found"</h1>
            <p class="not-found__subtitle">"Oops! The page you're looking for doesn't exist."</p>
            <div class="card not-found__card">
                <p class="not-found__hint">
                    "It seems you've navigated to a page that doesn't exist. Don't worry, let's get you back on track!"
                </p>
                <div class="not-found__actions">
                    <a class="btn btn--primary" href="/dashboard">
                        "Go to Dashboard"
                    </a>
                    <button class="btn" on:click=on_back>
                        "Go Back"
                    </button>
                </div>
            </div>
        </section>
    }
}

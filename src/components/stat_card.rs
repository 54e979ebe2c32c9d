//! Single dashboard stat tile.

use leptos::prelude::*;

#[component]
pub fn StatCard(
    title: &'static str,
    value: String,
    glyph: &'static str,
    accent: &'static str,
) -> impl IntoView {
    view! {
        <div class=format!("stat-card stat-card--{accent}")>
            <span class="stat-card__glyph">{glyph}</span>
            <div class="stat-card__body">
                <span class="stat-card__title">{title}</span>
                <span class="stat-card__value">{value}</span>
            </div>
        </div>
    }
}

//! AI insights: recommendation cards grouped by kind plus a grid of
//! spending predictions with confidence bars.

use leptos::prelude::*;

use crate::net::api::DEFAULT_PREDICTION_DAYS;
use crate::net::types::{Insight, Prediction};
use crate::util::format::{capitalize, format_currency};

const PREDICTION_DISPLAY_LIMIT: usize = 6;

#[component]
pub fn InsightsPage() -> impl IntoView {
    let insights = RwSignal::new(Vec::<Insight>::new());
    let predictions = RwSignal::new(Vec::<Prediction>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            let (insight_list, prediction_list) = futures::join!(
                crate::net::api::get_insights(),
                crate::net::api::get_predictions(DEFAULT_PREDICTION_DAYS),
            );
            match insight_list {
                Ok(list) => insights.set(list),
                Err(err) => leptos::logging::warn!("could not load insights: {err}"),
            }
            match prediction_list {
                Ok(list) => predictions.set(list),
                Err(err) => leptos::logging::warn!("could not load predictions: {err}"),
            }
            loading.set(false);
        });
    }

    view! {
        <section class="page insights">
            <header class="page__header page__header--banner">
                <h1 class="page__title">"\u{1f4a1} AI Insights"</h1>
                <p class="page__subtitle">
                    "Personalized financial recommendations based on your spending patterns"
                </p>
            </header>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page__status">"Loading insights..."</p> }
            >
                <Show when=move || !insights.get().is_empty()>
                    <div class="panel">
                        <h2 class="panel__title">"\u{1f4ca} Your Insights"</h2>
                        <div class="insight-list">
                            {move || {
                                insights
                                    .get()
                                    .into_iter()
                                    .map(|insight| {
                                        let actionable = insight.actionable;
                                        view! {
                                            <article class=format!(
                                                "insight-card insight-card--{}",
                                                insight_kind_modifier(&insight.kind),
                                            )>
                                                <span class="insight-card__glyph">
                                                    {insight_kind_glyph(&insight.kind)}
                                                </span>
                                                <div class="insight-card__body">
                                                    <div class="insight-card__headline">
                                                        <h3 class="insight-card__title">
                                                            {insight.title.clone()}
                                                        </h3>
                                                        <span class="insight-card__priority">
                                                            {capitalize(&insight.priority)}
                                                        </span>
                                                    </div>
                                                    <p class="insight-card__description">
                                                        {insight.description.clone()}
                                                    </p>
                                                    <Show when=move || actionable>
                                                        <button class="insight-card__action">
                                                            "Take Action \u{2192}"
                                                        </button>
                                                    </Show>
                                                </div>
                                            </article>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </div>
                </Show>

                <Show when=move || !predictions.get().is_empty()>
                    <div class="panel">
                        <h2 class="panel__title">"\u{1f4c8} Spending Predictions"</h2>
                        <div class="card-grid">
                            {move || {
                                predictions
                                    .get()
                                    .into_iter()
                                    .take(PREDICTION_DISPLAY_LIMIT)
                                    .map(|prediction| {
                                        view! {
                                            <article class="card prediction-card">
                                                <div class="card__header">
                                                    <h3 class="prediction-card__category">
                                                        {capitalize(&prediction.category)}
                                                    </h3>
                                                    <span class="prediction-card__initial">
                                                        {category_initial(&prediction.category)}
                                                    </span>
                                                </div>
                                                <p class="prediction-card__label">
                                                    "Predicted Amount"
                                                </p>
                                                <p class="prediction-card__amount">
                                                    {format_currency(prediction.predicted_amount)}
                                                </p>
                                                <div class="prediction-card__confidence">
                                                    <div class="prediction-card__confidence-figure">
                                                        <span class="prediction-card__label">
                                                            "Confidence"
                                                        </span>
                                                        <span class="prediction-card__percent">
                                                            {format!(
                                                                "{}%",
                                                                confidence_percent(prediction.confidence),
                                                            )}
                                                        </span>
                                                    </div>
                                                    <div class="progress">
                                                        <div
                                                            class="progress__bar progress__bar--confidence"
                                                            style=format!(
                                                                "width:{:.1}%",
                                                                confidence_bar_percent(prediction.confidence),
                                                            )
                                                        ></div>
                                                    </div>
                                                </div>
                                            </article>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </div>
                </Show>

                <Show when=move || insights.get().is_empty() && predictions.get().is_empty()>
                    <div class="empty-state">
                        <p class="empty-state__title">"No insights available yet"</p>
                        <p class="empty-state__hint">
                            "Start tracking your transactions to get personalized AI-powered financial recommendations"
                        </p>
                        <a class="btn btn--primary" href="/transactions">
                            "Add Your First Transaction \u{2192}"
                        </a>
                    </div>
                </Show>
            </Show>
        </section>
    }
}

fn insight_kind_glyph(kind: &str) -> &'static str {
    match kind {
        "warning" => "\u{26a0}\u{fe0f}",
        "achievement" => "\u{2705}",
        "goal" => "\u{1f4c8}",
        _ => "\u{1f4a1}",
    }
}

/// Card accent class; unknown kinds fall back to the tip styling.
fn insight_kind_modifier(kind: &str) -> &'static str {
    match kind {
        "warning" => "warning",
        "achievement" => "achievement",
        "goal" => "goal",
        _ => "tip",
    }
}

fn category_initial(category: &str) -> String {
    category
        .trim()
        .chars()
        .next()
        .map_or_else(|| "?".to_owned(), |first| first.to_uppercase().collect())
}

#[allow(clippy::cast_possible_truncation)]
fn confidence_percent(confidence: f64) -> i64 {
    (confidence * 100.0).round() as i64
}

fn confidence_bar_percent(confidence: f64) -> f64 {
    (confidence * 100.0).clamp(0.0, 100.0)
}

#[cfg(test)]
#[path = "insights_test.rs"]
mod insights_test;

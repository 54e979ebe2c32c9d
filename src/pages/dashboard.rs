//! Dashboard: greeting, stat cards, the spending overview, and short
//! previews of insights and predictions.
//!
//! The three aggregate endpoints are fetched in parallel and applied
//! independently as they land; one failing endpoint leaves the other
//! panels intact and only logs.

use leptos::prelude::*;

use crate::components::spending_overview::SpendingOverview;
use crate::components::stat_card::StatCard;
use crate::net::types::{DashboardSummary, Insight, Prediction};
use crate::state::session::SessionState;
use crate::util::format::{capitalize, format_currency};

const INSIGHT_PREVIEW_LIMIT: usize = 3;
const PREDICTION_PREVIEW_LIMIT: usize = 4;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let summary = RwSignal::new(None::<DashboardSummary>);
    let insights = RwSignal::new(Vec::<Insight>::new());
    let predictions = RwSignal::new(Vec::<Prediction>::new());
    let loading = RwSignal::new(true);

    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            let (summary_result, insights_result, predictions_result) = futures::join!(
                crate::net::api::get_dashboard(),
                crate::net::api::get_insights(),
                crate::net::api::get_predictions(crate::net::api::DEFAULT_PREDICTION_DAYS),
            );
            match summary_result {
                Ok(value) => summary.set(Some(value)),
                Err(err) => leptos::logging::warn!("dashboard summary failed: {err}"),
            }
            match insights_result {
                Ok(value) => insights.set(value),
                Err(err) => leptos::logging::warn!("insights failed: {err}"),
            }
            match predictions_result {
                Ok(value) => predictions.set(value),
                Err(err) => leptos::logging::warn!("predictions failed: {err}"),
            }
            loading.set(false);
        });
    }

    view! {
        <section class="page dashboard">
            <header class="page__header">
                <h1 class="page__title">
                    {move || greeting_line(&session.get().user.unwrap_or_default().name)}
                </h1>
                <p class="page__subtitle">"Here's your financial overview for this month"</p>
            </header>
            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page__status">"Loading your overview..."</p> }
            >
                <h2 class="section-title">"Financial Summary"</h2>
                <div class="stat-grid">
                    {move || {
                        stat_cards(summary.get().as_ref(), insights.get().len())
                            .into_iter()
                            .map(|(title, value, glyph, accent)| {
                                view! {
                                    <StatCard title=title value=value glyph=glyph accent=accent/>
                                }
                            })
                            .collect_view()
                    }}
                </div>
                {move || {
                    summary
                        .get()
                        .map(|snapshot| view! { <SpendingOverview summary=snapshot/> })
                }}
                <Show when=move || !insights.get().is_empty()>
                    <section class="panel dashboard__insights">
                        <h3 class="panel__title">"\u{1f4a1} AI-Generated Insights"</h3>
                        <div class="insight-preview-grid">
                            {move || {
                                insights
                                    .get()
                                    .iter()
                                    .take(INSIGHT_PREVIEW_LIMIT)
                                    .map(|insight| {
                                        view! {
                                            <div class="insight-preview">
                                                <h4 class="insight-preview__title">
                                                    {insight.title.clone()}
                                                </h4>
                                                <p class="insight-preview__description">
                                                    {insight.description.clone()}
                                                </p>
                                            </div>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </div>
                    </section>
                </Show>
                <Show when=move || !predictions.get().is_empty()>
                    <section class="panel dashboard__predictions">
                        <h3 class="panel__title">"\u{1f4c8} Next 30 Days"</h3>
                        <ul class="prediction-strip">
                            {move || {
                                predictions
                                    .get()
                                    .iter()
                                    .take(PREDICTION_PREVIEW_LIMIT)
                                    .map(|prediction| {
                                        view! {
                                            <li class="prediction-strip__item">
                                                <span class="prediction-strip__category">
                                                    {capitalize(&prediction.category)}
                                                </span>
                                                <span class="prediction-strip__amount">
                                                    {format_currency(prediction.predicted_amount)}
                                                </span>
                                            </li>
                                        }
                                    })
                                    .collect_view()
                            }}
                        </ul>
                    </section>
                </Show>
            </Show>
        </section>
    }
}

fn greeting_line(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        "Welcome back! \u{1f44b}".to_owned()
    } else {
        format!("Welcome back, {name}! \u{1f44b}")
    }
}

/// Card tuples for the stat grid: title, formatted value, glyph, accent
/// class. A missing summary renders as zeros rather than hiding cards.
fn stat_cards(
    summary: Option<&DashboardSummary>,
    insight_count: usize,
) -> Vec<(&'static str, String, &'static str, &'static str)> {
    let spent = summary.map_or(0.0, |snapshot| snapshot.total_spent);
    let saved = summary.map_or(0.0, |snapshot| snapshot.total_saved);
    let alert = summary.map_or(0.0, |snapshot| snapshot.budget_alert);
    vec![
        ("Total Spent", format_currency(spent), "\u{1f4b8}", "spent"),
        (
            "Saved This Month",
            format_currency(saved),
            "\u{1f3e6}",
            "saved",
        ),
        (
            "Budget Alert",
            format!("{alert:.1}%"),
            "\u{26a0}\u{fe0f}",
            "alert",
        ),
        (
            "AI Insights",
            insight_count.to_string(),
            "\u{1f4a1}",
            "insights",
        ),
    ]
}

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

//! Monthly spending chart plus the income/expense summary panel.
//!
//! DESIGN
//! ======
//! The pie is plain SVG: each category becomes one `path` arc in a
//! 100x100 viewBox, colored from a fixed palette by position. Slice
//! geometry is computed eagerly from the summary snapshot; re-fetching
//! the dashboard rebuilds the whole component.

use leptos::prelude::*;

use crate::net::types::{CategorySpend, DashboardSummary};
use crate::util::format::{capitalize, format_currency};

const PALETTE: &[&str] = &[
    "#06b6d4", "#8b5cf6", "#ec4899", "#f59e0b", "#10b981", "#ef4444",
];

const PIE_CENTER: f64 = 50.0;
const PIE_RADIUS: f64 = 45.0;

#[derive(Debug, Clone, PartialEq)]
struct PieSlice {
    category: String,
    amount: f64,
    percent: f64,
    path: String,
    color: &'static str,
}

#[component]
pub fn SpendingOverview(summary: DashboardSummary) -> impl IntoView {
    let slices = pie_slices(&summary.spending_by_category);
    let net_balance = summary.total_income - summary.total_expenses;

    let chart = if slices.is_empty() {
        view! { <p class="overview__empty">"No spending data for this month yet."</p> }
            .into_any()
    } else {
        view! {
            <svg viewBox="0 0 100 100" class="overview__pie" role="img">
                {slices
                    .iter()
                    .map(|slice| {
                        view! { <path d=slice.path.clone() fill=slice.color></path> }
                    })
                    .collect_view()}
            </svg>
            <ul class="overview__legend">
                {slices
                    .iter()
                    .map(|slice| {
                        view! {
                            <li class="overview__legend-item">
                                <span
                                    class="overview__swatch"
                                    style=format!("background:{}", slice.color)
                                ></span>
                                <span class="overview__legend-label">
                                    {capitalize(&slice.category)}
                                </span>
                                <span class="overview__legend-amount">
                                    {format_currency(slice.amount)}
                                </span>
                                <span class="overview__legend-percent">
                                    {format!("{:.1}%", slice.percent)}
                                </span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        }
        .into_any()
    };

    view! {
        <div class="overview">
            <div class="panel overview__chart">
                <h3 class="panel__title">"Monthly Spending Overview"</h3>
                {chart}
            </div>
            <div class="panel overview__summary">
                <h3 class="panel__title">"Financial Summary"</h3>
                <dl class="overview__rows">
                    <div class="overview__row overview__row--income">
                        <dt>"Total Income"</dt>
                        <dd>{format_currency(summary.total_income)}</dd>
                    </div>
                    <div class="overview__row overview__row--expenses">
                        <dt>"Total Expenses"</dt>
                        <dd>{format_currency(summary.total_expenses)}</dd>
                    </div>
                    <div class="overview__row overview__row--net">
                        <dt>"Net Balance"</dt>
                        <dd>{format_currency(net_balance)}</dd>
                    </div>
                    <div class="overview__row overview__row--rate">
                        <dt>"Savings Rate"</dt>
                        <dd>{format!("{:.1}%", summary.savings_rate)}</dd>
                    </div>
                </dl>
            </div>
        </div>
    }
}

/// Build renderable slices from per-category spending. Non-positive
/// amounts are dropped; an empty result means "nothing to chart".
fn pie_slices(spending: &[CategorySpend]) -> Vec<PieSlice> {
    let positive: Vec<&CategorySpend> = spending
        .iter()
        .filter(|entry| entry.amount > 0.0)
        .collect();
    let total: f64 = positive.iter().map(|entry| entry.amount).sum();
    if total <= 0.0 {
        return Vec::new();
    }

    // A lone category cannot be drawn as an arc between two coincident
    // points, so it gets the full-circle path.
    if positive.len() == 1 {
        let entry = positive[0];
        return vec![PieSlice {
            category: entry.category.clone(),
            amount: entry.amount,
            percent: 100.0,
            path: full_circle_path(),
            color: PALETTE[0],
        }];
    }

    let mut slices = Vec::with_capacity(positive.len());
    let mut start = 0.0;
    for (index, entry) in positive.iter().enumerate() {
        let fraction = entry.amount / total;
        let end = start + fraction;
        slices.push(PieSlice {
            category: entry.category.clone(),
            amount: entry.amount,
            percent: fraction * 100.0,
            path: arc_path(start, end),
            color: PALETTE[index % PALETTE.len()],
        });
        start = end;
    }
    slices
}

/// Wedge from `start` to `end`, both fractions of a full turn measured
/// clockwise from 12 o'clock.
fn arc_path(start: f64, end: f64) -> String {
    let (x1, y1) = point_on_circle(start);
    let (x2, y2) = point_on_circle(end);
    let large_arc = i32::from(end - start > 0.5);
    format!(
        "M {PIE_CENTER} {PIE_CENTER} L {x1:.4} {y1:.4} \
         A {PIE_RADIUS} {PIE_RADIUS} 0 {large_arc} 1 {x2:.4} {y2:.4} Z"
    )
}

fn full_circle_path() -> String {
    let top = PIE_CENTER - PIE_RADIUS;
    let bottom = PIE_CENTER + PIE_RADIUS;
    format!(
        "M {PIE_CENTER} {top} \
         A {PIE_RADIUS} {PIE_RADIUS} 0 1 1 {PIE_CENTER} {bottom} \
         A {PIE_RADIUS} {PIE_RADIUS} 0 1 1 {PIE_CENTER} {top} Z"
    )
}

fn point_on_circle(fraction: f64) -> (f64, f64) {
    let angle = fraction * std::f64::consts::TAU - std::f64::consts::FRAC_PI_2;
    (
        PIE_CENTER + PIE_RADIUS * angle.cos(),
        PIE_CENTER + PIE_RADIUS * angle.sin(),
    )
}

#[cfg(test)]
#[path = "spending_overview_test.rs"]
mod spending_overview_test;

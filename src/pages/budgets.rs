//! Budgets: card grid with per-budget usage bars, warning/exceeded
//! states, and create/edit/delete dialogs.
//!
//! Usage math lives in [`budget_usage`] so the thresholds are pinned by
//! tests: warning above 80% of the limit, exceeded above 100%.

use leptos::prelude::*;

use crate::net::types::{Budget, BudgetDraft};
use crate::util::format::{capitalize, category_color, category_glyph, format_currency, percent_of};

/// Categories a budget can be created for.
const BUDGET_CATEGORIES: &[(&str, &str)] = &[
    ("groceries", "Groceries"),
    ("dining", "Dining"),
    ("entertainment", "Entertainment"),
    ("transportation", "Transportation"),
    ("utilities", "Utilities"),
    ("healthcare", "Healthcare"),
];

const WARNING_THRESHOLD_PERCENT: f64 = 80.0;

#[component]
pub fn BudgetsPage() -> impl IntoView {
    let budgets = RwSignal::new(Vec::<Budget>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let show_add = RwSignal::new(false);
    let editing = RwSignal::new(None::<Budget>);
    let deleting = RwSignal::new(None::<Budget>);

    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            load_budgets(budgets, loading, error).await;
        });
    }

    let reload = move || {
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                load_budgets(budgets, loading, error).await;
            });
        }
    };

    view! {
        <section class="page budgets">
            <header class="page__header page__header--banner">
                <h1 class="page__title">"\u{1f4b0} Budgets"</h1>
                <p class="page__subtitle">"Manage and track your monthly budgets"</p>
            </header>

            <div class="page__controls">
                <button class="btn btn--primary" on:click=move |_| show_add.set(true)>
                    "+ Create Budget"
                </button>
            </div>

            <Show when=move || !error.get().is_empty()>
                <p class="page__error">{move || error.get()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page__status">"Loading budgets..."</p> }
            >
                <Show
                    when=move || !budgets.get().is_empty()
                    fallback=move || {
                        view! {
                            <div class="empty-state">
                                <p class="empty-state__title">"No budgets created yet"</p>
                                <p class="empty-state__hint">
                                    "Start managing your expenses by creating your first budget"
                                </p>
                                <button
                                    class="btn btn--primary"
                                    on:click=move |_| show_add.set(true)
                                >
                                    "Create Budget Now"
                                </button>
                            </div>
                        }
                    }
                >
                    <div class="card-grid">
                        <For
                            each=move || budgets.get()
                            key=|budget| budget.id
                            children=move |budget: Budget| {
                                let usage = budget_usage(&budget);
                                let edit_target = budget.clone();
                                let delete_target = budget.clone();
                                view! {
                                    <div class="card budget-card">
                                        <div class="card__header">
                                            <span
                                                class="category-chip"
                                                style=format!(
                                                    "color:{}",
                                                    category_color(&budget.category),
                                                )
                                            >
                                                {category_glyph(&budget.category)}
                                                " "
                                                {capitalize(&budget.category)}
                                            </span>
                                            <span class=format!(
                                                "status-badge status-badge--{}",
                                                status_modifier(usage),
                                            )>{status_label(usage)}</span>
                                        </div>
                                        <p class="budget-card__amounts">{spent_of_limit(&budget)}</p>
                                        <div class="progress">
                                            <div
                                                class=format!(
                                                    "progress__bar progress__bar--{}",
                                                    status_modifier(usage),
                                                )
                                                style=format!("width:{:.1}%", usage.percent_capped)
                                            ></div>
                                        </div>
                                        <p class="budget-card__percent">
                                            {format!("{:.1}% used", usage.percent)}
                                        </p>
                                        <Show when=move || usage.exceeded>
                                            <p class="budget-card__over">
                                                {format!(
                                                    "\u{26a0}\u{fe0f} Over budget by {}",
                                                    format_currency(usage.over_by),
                                                )}
                                            </p>
                                        </Show>
                                        <div class="card__actions">
                                            <button
                                                class="btn btn--small"
                                                on:click=move |_| {
                                                    editing.set(Some(edit_target.clone()));
                                                }
                                            >
                                                "Edit"
                                            </button>
                                            <button
                                                class="btn btn--small btn--danger"
                                                on:click=move |_| {
                                                    deleting.set(Some(delete_target.clone()));
                                                }
                                            >
                                                "Delete"
                                            </button>
                                        </div>
                                    </div>
                                }
                            }
                        />
                    </div>
                </Show>
            </Show>

            <Show when=move || show_add.get()>
                <BudgetDialog
                    on_close=Callback::new(move |()| show_add.set(false))
                    on_saved=Callback::new(move |()| {
                        show_add.set(false);
                        reload();
                    })
                />
            </Show>
            {move || {
                editing
                    .get()
                    .map(|budget| {
                        view! {
                            <BudgetDialog
                                editing=budget
                                on_close=Callback::new(move |()| editing.set(None))
                                on_saved=Callback::new(move |()| {
                                    editing.set(None);
                                    reload();
                                })
                            />
                        }
                    })
            }}
            {move || {
                deleting
                    .get()
                    .map(|budget| {
                        view! {
                            <DeleteBudgetDialog
                                target=budget
                                on_close=Callback::new(move |()| deleting.set(None))
                                on_deleted=Callback::new(move |()| {
                                    deleting.set(None);
                                    reload();
                                })
                            />
                        }
                    })
            }}
        </section>
    }
}

#[component]
fn BudgetDialog(
    #[prop(optional)] editing: Option<Budget>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let editing_id = editing.as_ref().map(|budget| budget.id);
    let category = RwSignal::new(
        editing
            .as_ref()
            .map_or_else(|| "groceries".to_owned(), |budget| budget.category.clone()),
    );
    let limit = RwSignal::new(
        editing
            .as_ref()
            .map(|budget| budget.limit.to_string())
            .unwrap_or_default(),
    );
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let title = if editing_id.is_some() {
        "Edit Budget"
    } else {
        "Create Budget"
    };

    let on_save = move |_| {
        if busy.get() {
            return;
        }
        error.set(String::new());
        let draft = match build_budget_draft(&category.get(), &limit.get()) {
            Ok(draft) => draft,
            Err(reason) => {
                error.set(reason.to_owned());
                return;
            }
        };
        #[cfg(feature = "csr")]
        {
            busy.set(true);
            leptos::task::spawn_local(async move {
                let result = match editing_id {
                    Some(id) => crate::net::api::update_budget(id, &draft).await,
                    None => crate::net::api::create_budget(&draft).await,
                };
                match result {
                    Ok(()) => on_saved.run(()),
                    Err(err) => {
                        error.set(err.display_message("Could not save budget"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (draft, on_saved);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <h2 class="dialog__title">{title}</h2>
                <Show when=move || !error.get().is_empty()>
                    <p class="dialog__error">{move || error.get()}</p>
                </Show>
                <label class="field">
                    <span class="field__label">"Category"</span>
                    <select
                        class="field__input"
                        prop:value=move || category.get()
                        on:change=move |ev| category.set(event_target_value(&ev))
                    >
                        {BUDGET_CATEGORIES
                            .iter()
                            .map(|&(value, label)| view! { <option value=value>{label}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="field">
                    <span class="field__label">"Monthly Limit"</span>
                    <input
                        type="number"
                        step="0.01"
                        min="0"
                        class="field__input"
                        placeholder="Budget Limit"
                        prop:value=move || limit.get()
                        on:input=move |ev| limit.set(event_target_value(&ev))
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=on_save>
                        {move || {
                            if busy.get() {
                                "Saving..."
                            } else if editing_id.is_some() {
                                "Save Changes"
                            } else {
                                "Create"
                            }
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn DeleteBudgetDialog(
    target: Budget,
    on_close: Callback<()>,
    on_deleted: Callback<()>,
) -> impl IntoView {
    let target_id = target.id;
    let category = capitalize(&target.category);
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_delete = move |_| {
        if busy.get() {
            return;
        }
        #[cfg(feature = "csr")]
        {
            busy.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::delete_budget(target_id).await {
                    Ok(()) => on_deleted.run(()),
                    Err(err) => {
                        error.set(err.display_message("Could not delete budget"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (target_id, on_deleted);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <h2 class="dialog__title">"Delete Budget"</h2>
                <Show when=move || !error.get().is_empty()>
                    <p class="dialog__error">{move || error.get()}</p>
                </Show>
                <p class="dialog__body">
                    "Delete the " {category} " budget? This cannot be undone."
                </p>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button
                        class="btn btn--danger"
                        disabled=move || busy.get()
                        on:click=on_delete
                    >
                        {move || if busy.get() { "Deleting..." } else { "Delete" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(feature = "csr")]
async fn load_budgets(
    budgets: RwSignal<Vec<Budget>>,
    loading: RwSignal<bool>,
    error: RwSignal<String>,
) {
    loading.set(true);
    match crate::net::api::list_budgets().await {
        Ok(list) => {
            budgets.set(list);
            error.set(String::new());
        }
        Err(err) => error.set(err.display_message("Could not load budgets")),
    }
    loading.set(false);
}

/// Derived render state for one budget card.
#[derive(Debug, Clone, Copy, PartialEq)]
struct BudgetUsage {
    percent: f64,
    /// Progress-bar width; the bar never overflows its track.
    percent_capped: f64,
    warning: bool,
    exceeded: bool,
    over_by: f64,
}

fn budget_usage(budget: &Budget) -> BudgetUsage {
    let percent = percent_of(budget.spent, budget.limit);
    BudgetUsage {
        percent,
        percent_capped: percent.min(100.0),
        warning: percent > WARNING_THRESHOLD_PERCENT,
        exceeded: percent > 100.0,
        over_by: (budget.spent - budget.limit).max(0.0),
    }
}

// Exceeded wins over warning; both flags are set past 100%.

fn status_label(usage: BudgetUsage) -> &'static str {
    if usage.exceeded {
        "\u{274c} Exceeded"
    } else if usage.warning {
        "\u{26a0}\u{fe0f} Warning"
    } else {
        "\u{2705} On Track"
    }
}

fn status_modifier(usage: BudgetUsage) -> &'static str {
    if usage.exceeded {
        "exceeded"
    } else if usage.warning {
        "warning"
    } else {
        "ok"
    }
}

fn spent_of_limit(budget: &Budget) -> String {
    format!(
        "{} of {}",
        format_currency(budget.spent),
        format_currency(budget.limit)
    )
}

fn build_budget_draft(category: &str, limit: &str) -> Result<BudgetDraft, &'static str> {
    let category = category.trim();
    if category.is_empty() {
        return Err("Category is required");
    }
    let Ok(limit) = limit.trim().parse::<f64>() else {
        return Err("Enter a valid budget limit");
    };
    if !limit.is_finite() || limit <= 0.0 {
        return Err("Budget limit must be greater than zero");
    }
    Ok(BudgetDraft {
        category: category.to_owned(),
        limit,
    })
}

#[cfg(test)]
#[path = "budgets_test.rs"]
mod budgets_test;

//! Savings goals: progress cards with deadline countdowns plus dialogs
//! for creating, editing, adding progress to, and deleting a goal.
//!
//! DESIGN
//! ======
//! Deadline math runs on calendar dates, not timestamps. A goal due
//! today reads "0 days"; it only turns overdue the day after. Adding
//! progress is an update that resends the whole goal with the new
//! saved amount, flipping the status to "completed" once the target is
//! reached.

use leptos::prelude::*;
use time::Date;

use crate::net::types::{Goal, GoalDraft};
use crate::util::format::{capitalize, format_currency, format_date, percent_of, today};

const PRIORITY_CHOICES: &[(&str, &str)] = &[
    ("low", "Low Priority"),
    ("medium", "Medium Priority"),
    ("high", "High Priority"),
];

#[component]
pub fn GoalsPage() -> impl IntoView {
    let goals = RwSignal::new(Vec::<Goal>::new());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let show_add = RwSignal::new(false);
    let editing = RwSignal::new(None::<Goal>);
    let adding_progress = RwSignal::new(None::<Goal>);
    let deleting = RwSignal::new(None::<Goal>);

    #[cfg(feature = "csr")]
    {
        leptos::task::spawn_local(async move {
            load_goals(goals, loading, error).await;
        });
    }

    let reload = move || {
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                load_goals(goals, loading, error).await;
            });
        }
    };

    view! {
        <section class="page goals">
            <header class="page__header page__header--banner">
                <h1 class="page__title">"\u{1f3af} Savings Goals"</h1>
                <p class="page__subtitle">"Set and track your financial goals"</p>
            </header>

            <div class="page__controls">
                <button class="btn btn--primary" on:click=move |_| show_add.set(true)>
                    "+ New Goal"
                </button>
            </div>

            <Show when=move || !error.get().is_empty()>
                <p class="page__error">{move || error.get()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page__status">"Loading goals..."</p> }
            >
                <Show
                    when=move || !goals.get().is_empty()
                    fallback=move || {
                        view! {
                            <div class="empty-state">
                                <p class="empty-state__title">"No savings goals yet"</p>
                                <p class="empty-state__hint">
                                    "Create your first goal to start planning"
                                </p>
                                <button
                                    class="btn btn--primary"
                                    on:click=move |_| show_add.set(true)
                                >
                                    "Set Your First Goal"
                                </button>
                            </div>
                        }
                    }
                >
                    <div class="goal-list">
                        <For
                            each=move || goals.get()
                            key=|goal| goal.id
                            children=move |goal: Goal| {
                                let days = days_left(&goal.deadline, today());
                                let progress = goal_progress(&goal);
                                let completed = goal.status == "completed";
                                let badge = deadline_badge(completed, days);
                                let badge_class = format!(
                                    "status-badge status-badge--{}",
                                    deadline_badge_modifier(completed, days),
                                );
                                let remaining = goal.target_amount - goal.saved_amount;
                                let monthly = monthly_target(
                                    goal.target_amount,
                                    days.unwrap_or(0),
                                );
                                let progress_target = goal.clone();
                                let edit_target = goal.clone();
                                let delete_target = goal.clone();
                                view! {
                                    <div class="card goal-card">
                                        <div class="card__header">
                                            <div class="goal-card__heading">
                                                <span class=if completed {
                                                    "goal-card__glyph goal-card__glyph--completed"
                                                } else {
                                                    "goal-card__glyph"
                                                }>"\u{1f3af}"</span>
                                                <div>
                                                    <h3 class="goal-card__name">{goal.name.clone()}</h3>
                                                    <p class="goal-card__priority">
                                                        "Priority: " {capitalize(&goal.priority)}
                                                    </p>
                                                </div>
                                            </div>
                                            <span class=badge_class>{badge}</span>
                                        </div>
                                        <div class="progress">
                                            <div
                                                class="progress__bar progress__bar--goal"
                                                style=format!("width:{:.1}%", progress.min(100.0))
                                            ></div>
                                        </div>
                                        <div class="goal-card__stats">
                                            <div class="goal-card__stat">
                                                <span class="goal-card__stat-label">"Saved"</span>
                                                <span class="goal-card__stat-value">
                                                    {format_currency(goal.saved_amount)}
                                                </span>
                                            </div>
                                            <div class="goal-card__stat">
                                                <span class="goal-card__stat-label">"Target"</span>
                                                <span class="goal-card__stat-value">
                                                    {format_currency(goal.target_amount)}
                                                </span>
                                            </div>
                                            <div class="goal-card__stat">
                                                <span class="goal-card__stat-label">"Progress"</span>
                                                <span class="goal-card__stat-value goal-card__stat-value--accent">
                                                    {format!("{progress:.1}%")}
                                                </span>
                                            </div>
                                            <div class="goal-card__stat">
                                                <span class="goal-card__stat-label">"Left"</span>
                                                <span class="goal-card__stat-value">
                                                    {format_currency(remaining)}
                                                </span>
                                            </div>
                                        </div>
                                        <div class="goal-card__deadline">
                                            <div>
                                                <span class="goal-card__stat-label">"Deadline"</span>
                                                <span class="goal-card__stat-value">
                                                    {format_date(&goal.deadline)}
                                                </span>
                                            </div>
                                            <div class="goal-card__deadline-right">
                                                <span class="goal-card__stat-label">
                                                    "Monthly Target"
                                                </span>
                                                <span class="goal-card__stat-value">
                                                    {format_currency(monthly)}
                                                </span>
                                            </div>
                                        </div>
                                        <div class="card__actions">
                                            <button
                                                class="btn btn--small"
                                                on:click=move |_| {
                                                    adding_progress.set(Some(progress_target.clone()));
                                                }
                                            >
                                                "\u{1f4c8} Add Progress"
                                            </button>
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
                <GoalDialog
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
                    .map(|goal| {
                        view! {
                            <GoalDialog
                                editing=goal
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
                adding_progress
                    .get()
                    .map(|goal| {
                        view! {
                            <AddProgressDialog
                                target=goal
                                on_close=Callback::new(move |()| adding_progress.set(None))
                                on_saved=Callback::new(move |()| {
                                    adding_progress.set(None);
                                    reload();
                                })
                            />
                        }
                    })
            }}
            {move || {
                deleting
                    .get()
                    .map(|goal| {
                        view! {
                            <DeleteGoalDialog
                                target=goal
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
fn GoalDialog(
    #[prop(optional)] editing: Option<Goal>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let editing_id = editing.as_ref().map(|goal| goal.id);
    let name = RwSignal::new(
        editing
            .as_ref()
            .map(|goal| goal.name.clone())
            .unwrap_or_default(),
    );
    let target = RwSignal::new(
        editing
            .as_ref()
            .map(|goal| goal.target_amount.to_string())
            .unwrap_or_default(),
    );
    let deadline = RwSignal::new(
        editing
            .as_ref()
            .map(|goal| goal.deadline.clone())
            .unwrap_or_default(),
    );
    let priority = RwSignal::new(
        editing
            .as_ref()
            .map_or_else(|| "medium".to_owned(), |goal| goal.priority.clone()),
    );
    let existing = editing;
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let title = if editing_id.is_some() {
        "Edit Goal"
    } else {
        "Create New Goal"
    };

    let on_save = move |_| {
        if busy.get() {
            return;
        }
        error.set(String::new());
        let draft = match build_goal_draft(
            &name.get(),
            &target.get(),
            &deadline.get(),
            &priority.get(),
            existing.as_ref(),
        ) {
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
                    Some(id) => crate::net::api::update_goal(id, &draft).await,
                    None => crate::net::api::create_goal(&draft).await,
                };
                match result {
                    Ok(()) => on_saved.run(()),
                    Err(err) => {
                        error.set(err.display_message("Could not save goal"));
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
                    <span class="field__label">"Goal Name"</span>
                    <input
                        type="text"
                        class="field__input"
                        placeholder="Goal Name (e.g., Vacation)"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Target Amount"</span>
                    <input
                        type="number"
                        step="0.01"
                        min="0"
                        class="field__input"
                        placeholder="Target Amount"
                        prop:value=move || target.get()
                        on:input=move |ev| target.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Deadline"</span>
                    <input
                        type="date"
                        class="field__input"
                        prop:value=move || deadline.get()
                        on:input=move |ev| deadline.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Priority"</span>
                    <select
                        class="field__input"
                        prop:value=move || priority.get()
                        on:change=move |ev| priority.set(event_target_value(&ev))
                    >
                        {PRIORITY_CHOICES
                            .iter()
                            .map(|&(value, label)| view! { <option value=value>{label}</option> })
                            .collect_view()}
                    </select>
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
                                "Create Goal"
                            }
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn AddProgressDialog(
    target: Goal,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let goal = target;
    let goal_id = goal.id;
    let saved_line = format!(
        "{} of {} saved",
        format_currency(goal.saved_amount),
        format_currency(goal.target_amount)
    );
    let amount = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_save = move |_| {
        if busy.get() {
            return;
        }
        error.set(String::new());
        let added = match parse_progress_amount(&amount.get()) {
            Ok(added) => added,
            Err(reason) => {
                error.set(reason.to_owned());
                return;
            }
        };
        let draft = progress_update_draft(&goal, added);
        #[cfg(feature = "csr")]
        {
            busy.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::update_goal(goal_id, &draft).await {
                    Ok(()) => on_saved.run(()),
                    Err(err) => {
                        error.set(err.display_message("Could not update goal"));
                        busy.set(false);
                    }
                }
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (goal_id, draft, on_saved);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog" on:click=|ev| ev.stop_propagation()>
                <h2 class="dialog__title">"Add Progress"</h2>
                <p class="dialog__body">{saved_line}</p>
                <Show when=move || !error.get().is_empty()>
                    <p class="dialog__error">{move || error.get()}</p>
                </Show>
                <label class="field">
                    <span class="field__label">"Amount to Add"</span>
                    <input
                        type="number"
                        step="0.01"
                        min="0"
                        class="field__input"
                        placeholder="Amount"
                        prop:value=move || amount.get()
                        on:input=move |ev| amount.set(event_target_value(&ev))
                    />
                </label>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" disabled=move || busy.get() on:click=on_save>
                        {move || if busy.get() { "Saving..." } else { "Add" }}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn DeleteGoalDialog(
    target: Goal,
    on_close: Callback<()>,
    on_deleted: Callback<()>,
) -> impl IntoView {
    let target_id = target.id;
    let name = target.name;
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
                match crate::net::api::delete_goal(target_id).await {
                    Ok(()) => on_deleted.run(()),
                    Err(err) => {
                        error.set(err.display_message("Could not delete goal"));
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
                <h2 class="dialog__title">"Delete Goal"</h2>
                <Show when=move || !error.get().is_empty()>
                    <p class="dialog__error">{move || error.get()}</p>
                </Show>
                <p class="dialog__body">"Delete \"" {name} "\"? This cannot be undone."</p>
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
async fn load_goals(
    goals: RwSignal<Vec<Goal>>,
    loading: RwSignal<bool>,
    error: RwSignal<String>,
) {
    loading.set(true);
    match crate::net::api::list_goals().await {
        Ok(list) => {
            goals.set(list);
            error.set(String::new());
        }
        Err(err) => error.set(err.display_message("Could not load goals")),
    }
    loading.set(false);
}

fn goal_progress(goal: &Goal) -> f64 {
    percent_of(goal.saved_amount, goal.target_amount)
}

/// Whole days from `today` to the goal's deadline. `None` when the
/// deadline string does not parse as a date.
fn days_left(deadline: &str, today: Date) -> Option<i64> {
    let deadline = crate::util::format::parse_iso_date(deadline)?;
    Some(i64::from(deadline.to_julian_day() - today.to_julian_day()))
}

fn deadline_badge(completed: bool, days: Option<i64>) -> String {
    if completed {
        return "\u{2705} Completed".to_owned();
    }
    match days {
        Some(days) if days < 0 => "\u{23f0} Overdue".to_owned(),
        Some(days) => format!("{days} days"),
        None => "No deadline".to_owned(),
    }
}

fn deadline_badge_modifier(completed: bool, days: Option<i64>) -> &'static str {
    if completed {
        "completed"
    } else if days.is_some_and(|days| days < 0) {
        "overdue"
    } else {
        "active"
    }
}

/// Pace needed to hit the full target by the deadline, in dollars per
/// thirty days. Past-due and unparseable deadlines read as zero.
#[allow(clippy::cast_precision_loss)]
fn monthly_target(target: f64, days: i64) -> f64 {
    if days <= 0 {
        return 0.0;
    }
    target / (days as f64 / 30.0)
}

fn build_goal_draft(
    name: &str,
    target: &str,
    deadline: &str,
    priority: &str,
    existing: Option<&Goal>,
) -> Result<GoalDraft, &'static str> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Goal name is required");
    }
    let Ok(target_amount) = target.trim().parse::<f64>() else {
        return Err("Enter a valid target amount");
    };
    if !target_amount.is_finite() || target_amount <= 0.0 {
        return Err("Target amount must be greater than zero");
    }
    let deadline = deadline.trim();
    if deadline.is_empty() {
        return Err("Deadline is required");
    }
    let (saved_amount, status) = existing.map_or_else(
        || (0.0, "active".to_owned()),
        |goal| (goal.saved_amount, goal.status.clone()),
    );
    Ok(GoalDraft {
        name: name.to_owned(),
        target_amount,
        saved_amount,
        deadline: deadline.to_owned(),
        priority: priority.to_owned(),
        status,
    })
}

fn parse_progress_amount(text: &str) -> Result<f64, &'static str> {
    let Ok(amount) = text.trim().parse::<f64>() else {
        return Err("Enter a valid amount");
    };
    if !amount.is_finite() || amount <= 0.0 {
        return Err("Enter an amount greater than zero");
    }
    Ok(amount)
}

/// Resends the goal with `added` on top of the saved amount, marking it
/// completed once the target is reached.
fn progress_update_draft(goal: &Goal, added: f64) -> GoalDraft {
    let saved_amount = goal.saved_amount + added;
    let status = if goal.target_amount > 0.0 && saved_amount >= goal.target_amount {
        "completed".to_owned()
    } else {
        goal.status.clone()
    };
    GoalDraft {
        name: goal.name.clone(),
        target_amount: goal.target_amount,
        saved_amount,
        deadline: goal.deadline.clone(),
        priority: goal.priority.clone(),
        status,
    }
}

#[cfg(test)]
#[path = "goals_test.rs"]
mod goals_test;

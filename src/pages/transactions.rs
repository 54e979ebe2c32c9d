//! Transactions: filterable table, income/expense totals, add/edit and
//! delete dialogs, and CSV import.
//!
//! DESIGN
//! ======
//! Filter edits re-query the server rather than filtering client-side,
//! debounced so date-picker scrubbing does not fire a request per
//! keystroke. A sequence counter tied to each edit lets a superseded
//! debounce sleep discard itself without cancellation plumbing.

use leptos::prelude::*;

use crate::components::stat_card::StatCard;
use crate::net::api::TransactionFilters;
use crate::net::types::{Transaction, TransactionDraft, TransactionKind};
use crate::util::format::{
    capitalize, category_color, category_glyph, format_currency, format_date, today_iso,
    truncate_text,
};

/// Categories offered by the add/edit form. The table itself renders
/// whatever category the server sends.
const TRANSACTION_CATEGORIES: &[(&str, &str)] = &[
    ("groceries", "Groceries"),
    ("dining", "Dining"),
    ("entertainment", "Entertainment"),
    ("transportation", "Transportation"),
    ("utilities", "Utilities"),
    ("healthcare", "Healthcare"),
    ("shopping", "Shopping"),
];

const FILTER_DEBOUNCE_MS: u64 = 250;
const DESCRIPTION_PREVIEW_CHARS: usize = 50;

#[component]
pub fn TransactionsPage() -> impl IntoView {
    let transactions = RwSignal::new(Vec::<Transaction>::new());
    let filters = RwSignal::new(TransactionFilters::default());
    let loading = RwSignal::new(true);
    let error = RwSignal::new(String::new());
    let show_add = RwSignal::new(false);
    let editing = RwSignal::new(None::<Transaction>);
    let deleting = RwSignal::new(None::<Transaction>);
    let reload_seq = RwSignal::new(0_u32);
    let file_input = NodeRef::<leptos::html::Input>::new();

    // Initial load plus a debounced reload on every filter edit. The
    // first run (sequence 1) skips the debounce so the page does not
    // sit empty for no reason.
    Effect::new(move |_| {
        let current = filters.get();
        let seq = reload_seq.get_untracked() + 1;
        reload_seq.update_untracked(|value| *value = seq);
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                if seq > 1 {
                    gloo_timers::future::sleep(std::time::Duration::from_millis(
                        FILTER_DEBOUNCE_MS,
                    ))
                    .await;
                    if reload_seq.get_untracked() != seq {
                        return;
                    }
                }
                load_transactions(current, transactions, loading, error).await;
            });
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (current, seq);
        }
    });

    let reload = move || {
        #[cfg(feature = "csr")]
        {
            leptos::task::spawn_local(async move {
                load_transactions(filters.get_untracked(), transactions, loading, error).await;
            });
        }
    };

    let on_import_click = move |_| {
        #[cfg(feature = "csr")]
        {
            if let Some(input) = file_input.get() {
                input.click();
            }
        }
    };

    let on_file_selected = move |_ev: leptos::ev::Event| {
        #[cfg(feature = "csr")]
        {
            let Some(input) = file_input.get() else {
                return;
            };
            let Some(file) = input.files().and_then(|files| files.get(0)) else {
                return;
            };
            input.set_value("");
            error.set(String::new());
            loading.set(true);
            leptos::task::spawn_local(async move {
                match crate::net::api::import_transactions(&file).await {
                    Ok(()) => {
                        load_transactions(filters.get_untracked(), transactions, loading, error)
                            .await;
                    }
                    Err(err) => {
                        error.set(err.display_message("Import failed"));
                        loading.set(false);
                    }
                }
            });
        }
    };

    view! {
        <section class="page transactions">
            <header class="page__header page__header--banner">
                <h1 class="page__title">"\u{1f4b3} Transactions"</h1>
                <p class="page__subtitle">"Track all your income and expenses"</p>
            </header>

            <div class="stat-grid stat-grid--thirds">
                {move || {
                    let (income, expenses, net) = income_expense_totals(&transactions.get());
                    view! {
                        <StatCard
                            title="Total Income"
                            value=format_currency(income)
                            glyph="\u{1f4c8}"
                            accent="income"
                        />
                        <StatCard
                            title="Total Expenses"
                            value=format_currency(expenses)
                            glyph="\u{1f4c9}"
                            accent="expenses"
                        />
                        <StatCard
                            title="Net Balance"
                            value=format_currency(net)
                            glyph="\u{1f4b5}"
                            accent="net"
                        />
                    }
                }}
            </div>

            <div class="page__controls">
                <button class="btn btn--primary" on:click=move |_| show_add.set(true)>
                    "+ Add Transaction"
                </button>
                <button class="btn" on:click=on_import_click>
                    "\u{2b06}\u{fe0f} Import CSV"
                </button>
                <input
                    type="file"
                    accept=".csv,text/csv"
                    class="transactions__file-input"
                    node_ref=file_input
                    on:change=on_file_selected
                />
            </div>

            <div class="panel filters">
                <h3 class="panel__title">"Filters"</h3>
                <div class="filters__row">
                    <input
                        type="text"
                        class="field__input"
                        placeholder="Category..."
                        prop:value=move || filters.get().category
                        on:input=move |ev| {
                            filters.update(|f| f.category = event_target_value(&ev));
                        }
                    />
                    <input
                        type="date"
                        class="field__input"
                        prop:value=move || filters.get().start_date
                        on:input=move |ev| {
                            filters.update(|f| f.start_date = event_target_value(&ev));
                        }
                    />
                    <input
                        type="date"
                        class="field__input"
                        prop:value=move || filters.get().end_date
                        on:input=move |ev| {
                            filters.update(|f| f.end_date = event_target_value(&ev));
                        }
                    />
                </div>
            </div>

            <Show when=move || !error.get().is_empty()>
                <p class="page__error">{move || error.get()}</p>
            </Show>

            <Show
                when=move || !loading.get()
                fallback=|| view! { <p class="page__status">"Loading transactions..."</p> }
            >
                <Show
                    when=move || !transactions.get().is_empty()
                    fallback=|| {
                        view! {
                            <div class="empty-state">
                                <p class="empty-state__title">"No transactions yet"</p>
                                <p class="empty-state__hint">
                                    "Click \"Add Transaction\" to get started"
                                </p>
                            </div>
                        }
                    }
                >
                    <div class="panel table-panel">
                        <table class="table">
                            <thead>
                                <tr>
                                    <th>"Description"</th>
                                    <th>"Category"</th>
                                    <th>"Type"</th>
                                    <th>"Amount"</th>
                                    <th>"Date"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || transactions.get()
                                    key=|transaction| transaction.id
                                    children=move |transaction: Transaction| {
                                        let edit_target = transaction.clone();
                                        let delete_target = transaction.clone();
                                        view! {
                                            <tr>
                                                <td class="table__cell--strong">
                                                    {truncate_text(
                                                        &transaction.description,
                                                        DESCRIPTION_PREVIEW_CHARS,
                                                    )}
                                                </td>
                                                <td>
                                                    <span
                                                        class="category-chip"
                                                        style=format!(
                                                            "color:{}",
                                                            category_color(&transaction.category),
                                                        )
                                                    >
                                                        {category_glyph(&transaction.category)}
                                                        " "
                                                        {capitalize(&transaction.category)}
                                                    </span>
                                                </td>
                                                <td>
                                                    <span class=format!(
                                                        "kind-badge kind-badge--{}",
                                                        kind_slug(transaction.kind),
                                                    )>{kind_badge(transaction.kind)}</span>
                                                </td>
                                                <td class=format!(
                                                    "table__cell--{}",
                                                    kind_slug(transaction.kind),
                                                )>{signed_amount(&transaction)}</td>
                                                <td>{format_date(&transaction.date)}</td>
                                                <td class="table__cell--actions">
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
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                </Show>
            </Show>

            <Show when=move || show_add.get()>
                <TransactionDialog
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
                    .map(|transaction| {
                        view! {
                            <TransactionDialog
                                editing=transaction
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
                    .map(|transaction| {
                        view! {
                            <DeleteTransactionDialog
                                target=transaction
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
fn TransactionDialog(
    #[prop(optional)] editing: Option<Transaction>,
    on_close: Callback<()>,
    on_saved: Callback<()>,
) -> impl IntoView {
    let editing_id = editing.as_ref().map(|transaction| transaction.id);
    let description = RwSignal::new(
        editing
            .as_ref()
            .map(|transaction| transaction.description.clone())
            .unwrap_or_default(),
    );
    let amount = RwSignal::new(
        editing
            .as_ref()
            .map(|transaction| transaction.amount.to_string())
            .unwrap_or_default(),
    );
    let category = RwSignal::new(
        editing
            .as_ref()
            .map_or_else(|| "groceries".to_owned(), |transaction| {
                transaction.category.clone()
            }),
    );
    let kind = RwSignal::new(
        editing
            .as_ref()
            .map_or(TransactionKind::Expense, |transaction| transaction.kind),
    );
    let date = RwSignal::new(
        editing
            .as_ref()
            .map_or_else(today_iso, |transaction| transaction.date.clone()),
    );
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let title = if editing_id.is_some() {
        "Edit Transaction"
    } else {
        "Add Transaction"
    };

    let on_save = move |_| {
        if busy.get() {
            return;
        }
        error.set(String::new());
        let draft = match build_transaction_draft(
            &description.get(),
            &amount.get(),
            &category.get(),
            kind.get(),
            &date.get(),
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
                    Some(id) => crate::net::api::update_transaction(id, &draft).await,
                    None => crate::net::api::create_transaction(&draft).await,
                };
                match result {
                    Ok(()) => on_saved.run(()),
                    Err(err) => {
                        error.set(err.display_message("Could not save transaction"));
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
                    <span class="field__label">"Description"</span>
                    <input
                        type="text"
                        class="field__input"
                        placeholder="Description"
                        prop:value=move || description.get()
                        on:input=move |ev| description.set(event_target_value(&ev))
                    />
                </label>
                <label class="field">
                    <span class="field__label">"Amount"</span>
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
                <label class="field">
                    <span class="field__label">"Category"</span>
                    <select
                        class="field__input"
                        prop:value=move || category.get()
                        on:change=move |ev| category.set(event_target_value(&ev))
                    >
                        {TRANSACTION_CATEGORIES
                            .iter()
                            .map(|&(value, label)| view! { <option value=value>{label}</option> })
                            .collect_view()}
                    </select>
                </label>
                <label class="field">
                    <span class="field__label">"Type"</span>
                    <select
                        class="field__input"
                        prop:value=move || kind_slug(kind.get())
                        on:change=move |ev| kind.set(parse_kind(&event_target_value(&ev)))
                    >
                        <option value="expense">"Expense"</option>
                        <option value="income">"Income"</option>
                    </select>
                </label>
                <label class="field">
                    <span class="field__label">"Date"</span>
                    <input
                        type="date"
                        class="field__input"
                        prop:value=move || date.get()
                        on:input=move |ev| date.set(event_target_value(&ev))
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
                                "Add"
                            }
                        }}
                    </button>
                </div>
            </div>
        </div>
    }
}

#[component]
fn DeleteTransactionDialog(
    target: Transaction,
    on_close: Callback<()>,
    on_deleted: Callback<()>,
) -> impl IntoView {
    let target_id = target.id;
    let description = truncate_text(&target.description, DESCRIPTION_PREVIEW_CHARS);
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
                match crate::net::api::delete_transaction(target_id).await {
                    Ok(()) => on_deleted.run(()),
                    Err(err) => {
                        error.set(err.display_message("Could not delete transaction"));
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
                <h2 class="dialog__title">"Delete Transaction"</h2>
                <Show when=move || !error.get().is_empty()>
                    <p class="dialog__error">{move || error.get()}</p>
                </Show>
                <p class="dialog__body">
                    "Delete \"" {description} "\"? This cannot be undone."
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
async fn load_transactions(
    filters: TransactionFilters,
    transactions: RwSignal<Vec<Transaction>>,
    loading: RwSignal<bool>,
    error: RwSignal<String>,
) {
    loading.set(true);
    match crate::net::api::list_transactions(&filters).await {
        Ok(list) => {
            transactions.set(list);
            error.set(String::new());
        }
        Err(err) => error.set(err.display_message("Could not load transactions")),
    }
    loading.set(false);
}

/// Income total, expense total, and net balance for the visible rows.
fn income_expense_totals(transactions: &[Transaction]) -> (f64, f64, f64) {
    let income: f64 = transactions
        .iter()
        .filter(|transaction| transaction.kind == TransactionKind::Income)
        .map(|transaction| transaction.amount)
        .sum();
    let expenses: f64 = transactions
        .iter()
        .filter(|transaction| transaction.kind == TransactionKind::Expense)
        .map(|transaction| transaction.amount)
        .sum();
    (income, expenses, income - expenses)
}

/// Amount cell text: income shows `+$...`, expense `-$...`.
fn signed_amount(transaction: &Transaction) -> String {
    let formatted = format_currency(transaction.amount.abs());
    match transaction.kind {
        TransactionKind::Income => format!("+{formatted}"),
        TransactionKind::Expense => format!("-{formatted}"),
    }
}

fn kind_badge(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => "\u{1f4c8} Income",
        TransactionKind::Expense => "\u{1f4c9} Expense",
    }
}

fn kind_slug(kind: TransactionKind) -> &'static str {
    match kind {
        TransactionKind::Income => "income",
        TransactionKind::Expense => "expense",
    }
}

fn parse_kind(value: &str) -> TransactionKind {
    if value == "income" {
        TransactionKind::Income
    } else {
        TransactionKind::Expense
    }
}

fn build_transaction_draft(
    description: &str,
    amount: &str,
    category: &str,
    kind: TransactionKind,
    date: &str,
) -> Result<TransactionDraft, &'static str> {
    let description = description.trim();
    if description.is_empty() {
        return Err("Description is required");
    }
    let Ok(amount) = amount.trim().parse::<f64>() else {
        return Err("Enter a valid amount");
    };
    if !amount.is_finite() || amount <= 0.0 {
        return Err("Amount must be greater than zero");
    }
    let date = date.trim();
    if date.is_empty() {
        return Err("Date is required");
    }
    Ok(TransactionDraft {
        description: description.to_owned(),
        amount,
        category: category.to_owned(),
        kind,
        date: date.to_owned(),
    })
}

#[cfg(test)]
#[path = "transactions_test.rs"]
mod transactions_test;

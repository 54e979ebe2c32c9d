use super::*;

fn tx(kind: TransactionKind, amount: f64) -> Transaction {
    Transaction {
        id: 1,
        description: "test".to_owned(),
        amount,
        category: "groceries".to_owned(),
        kind,
        date: "2026-01-05".to_owned(),
    }
}

// ====== totals ======

#[test]
fn totals_split_by_kind() {
    let rows = vec![
        tx(TransactionKind::Income, 3000.0),
        tx(TransactionKind::Expense, 800.0),
        tx(TransactionKind::Expense, 200.0),
    ];
    let (income, expenses, net) = income_expense_totals(&rows);
    assert!((income - 3000.0).abs() < 1e-9);
    assert!((expenses - 1000.0).abs() < 1e-9);
    assert!((net - 2000.0).abs() < 1e-9);
}

#[test]
fn totals_of_empty_list_are_zero() {
    let (income, expenses, net) = income_expense_totals(&[]);
    assert!(income.abs() < 1e-9);
    assert!(expenses.abs() < 1e-9);
    assert!(net.abs() < 1e-9);
}

// ====== row presentation ======

#[test]
fn income_amount_is_prefixed_plus() {
    assert_eq!(signed_amount(&tx(TransactionKind::Income, 1200.0)), "+$1,200.00");
}

#[test]
fn expense_amount_is_prefixed_minus() {
    assert_eq!(signed_amount(&tx(TransactionKind::Expense, 45.5)), "-$45.50");
}

#[test]
fn badges_match_kind() {
    assert_eq!(kind_badge(TransactionKind::Income), "\u{1f4c8} Income");
    assert_eq!(kind_badge(TransactionKind::Expense), "\u{1f4c9} Expense");
    assert_eq!(kind_slug(TransactionKind::Income), "income");
    assert_eq!(kind_slug(TransactionKind::Expense), "expense");
}

#[test]
fn kind_parses_from_select_value() {
    assert_eq!(parse_kind("income"), TransactionKind::Income);
    assert_eq!(parse_kind("expense"), TransactionKind::Expense);
    assert_eq!(parse_kind("anything else"), TransactionKind::Expense);
}

// ====== draft validation ======

#[test]
fn draft_requires_description() {
    assert_eq!(
        build_transaction_draft("  ", "10", "dining", TransactionKind::Expense, "2026-01-05"),
        Err("Description is required")
    );
}

#[test]
fn draft_rejects_unparseable_amount() {
    assert_eq!(
        build_transaction_draft("Coffee", "ten", "dining", TransactionKind::Expense, "2026-01-05"),
        Err("Enter a valid amount")
    );
    assert_eq!(
        build_transaction_draft("Coffee", "", "dining", TransactionKind::Expense, "2026-01-05"),
        Err("Enter a valid amount")
    );
}

#[test]
fn draft_rejects_non_positive_amount() {
    assert_eq!(
        build_transaction_draft("Coffee", "0", "dining", TransactionKind::Expense, "2026-01-05"),
        Err("Amount must be greater than zero")
    );
    assert_eq!(
        build_transaction_draft("Coffee", "-4", "dining", TransactionKind::Expense, "2026-01-05"),
        Err("Amount must be greater than zero")
    );
}

#[test]
fn draft_requires_date() {
    assert_eq!(
        build_transaction_draft("Coffee", "4.50", "dining", TransactionKind::Expense, ""),
        Err("Date is required")
    );
}

#[test]
fn draft_trims_and_builds() {
    let draft = build_transaction_draft(
        "  Coffee  ",
        " 4.50 ",
        "dining",
        TransactionKind::Expense,
        " 2026-01-05 ",
    )
    .unwrap();
    assert_eq!(draft.description, "Coffee");
    assert!((draft.amount - 4.5).abs() < 1e-9);
    assert_eq!(draft.category, "dining");
    assert_eq!(draft.kind, TransactionKind::Expense);
    assert_eq!(draft.date, "2026-01-05");
}

// ====== form categories ======

#[test]
fn form_offers_the_seven_entry_categories() {
    let values: Vec<&str> = TRANSACTION_CATEGORIES.iter().map(|&(value, _)| value).collect();
    assert_eq!(
        values,
        [
            "groceries",
            "dining",
            "entertainment",
            "transportation",
            "utilities",
            "healthcare",
            "shopping",
        ]
    );
}

use super::*;
use serde_json::json;

// ====== lenient amounts ======

#[test]
fn amount_accepts_number() {
    let tx: Transaction = serde_json::from_value(json!({"id": 1, "amount": 12.5})).unwrap();
    assert!((tx.amount - 12.5).abs() < 1e-9);
}

#[test]
fn amount_accepts_numeric_string() {
    let tx: Transaction = serde_json::from_value(json!({"id": 1, "amount": " 99.25 "})).unwrap();
    assert!((tx.amount - 99.25).abs() < 1e-9);
}

#[test]
fn amount_null_and_malformed_string_become_zero() {
    let tx: Transaction = serde_json::from_value(json!({"id": 1, "amount": null})).unwrap();
    assert!(tx.amount.abs() < 1e-9);
    let tx: Transaction = serde_json::from_value(json!({"id": 1, "amount": "free"})).unwrap();
    assert!(tx.amount.abs() < 1e-9);
}

#[test]
fn amount_missing_becomes_zero() {
    let tx: Transaction = serde_json::from_value(json!({"id": 1})).unwrap();
    assert!(tx.amount.abs() < 1e-9);
}

#[test]
fn amount_rejects_structured_values() {
    let parsed: Result<Transaction, _> =
        serde_json::from_value(json!({"id": 1, "amount": {"cents": 5}}));
    assert!(parsed.is_err());
}

// ====== users and auth ======

#[test]
fn empty_user_object_parses() {
    let user: User = serde_json::from_str("{}").unwrap();
    assert_eq!(user, User::default());
}

#[test]
fn auth_response_defaults_missing_user() {
    let auth: AuthResponse = serde_json::from_value(json!({"token": "abc"})).unwrap();
    assert_eq!(auth.token, "abc");
    assert_eq!(auth.user, User::default());
}

// ====== transactions ======

#[test]
fn transaction_kind_uses_type_key() {
    let tx: Transaction =
        serde_json::from_value(json!({"id": 7, "type": "income"})).unwrap();
    assert_eq!(tx.kind, TransactionKind::Income);
}

#[test]
fn transaction_kind_defaults_to_expense() {
    let tx: Transaction = serde_json::from_value(json!({"id": 7})).unwrap();
    assert_eq!(tx.kind, TransactionKind::Expense);
}

#[test]
fn transaction_list_envelope_defaults_to_empty() {
    let list: TransactionListResponse = serde_json::from_str("{}").unwrap();
    assert!(list.data.is_empty());
}

#[test]
fn transaction_draft_serializes_type_key() {
    let draft = TransactionDraft {
        description: "Coffee".to_owned(),
        amount: 4.5,
        category: "dining".to_owned(),
        kind: TransactionKind::Expense,
        date: "2026-01-05".to_owned(),
    };
    let value = serde_json::to_value(&draft).unwrap();
    assert_eq!(
        value,
        json!({
            "description": "Coffee",
            "amount": 4.5,
            "category": "dining",
            "type": "expense",
            "date": "2026-01-05",
        })
    );
}

// ====== goals ======

#[test]
fn goal_reads_camel_case_keys() {
    let goal: Goal = serde_json::from_value(json!({
        "id": 3,
        "name": "Vacation",
        "targetAmount": "2500",
        "savedAmount": 400,
        "deadline": "2026-06-01",
    }))
    .unwrap();
    assert!((goal.target_amount - 2500.0).abs() < 1e-9);
    assert!((goal.saved_amount - 400.0).abs() < 1e-9);
    assert_eq!(goal.priority, "medium");
    assert_eq!(goal.status, "active");
}

#[test]
fn goal_draft_serializes_camel_case_keys() {
    let draft = GoalDraft {
        name: "Vacation".to_owned(),
        target_amount: 2500.0,
        saved_amount: 0.0,
        deadline: "2026-06-01".to_owned(),
        priority: "high".to_owned(),
        status: "active".to_owned(),
    };
    let value = serde_json::to_value(&draft).unwrap();
    assert_eq!(value["targetAmount"], json!(2500.0));
    assert_eq!(value["savedAmount"], json!(0.0));
    assert_eq!(value["status"], json!("active"));
}

// ====== dashboard ======

#[test]
fn dashboard_summary_reads_camel_case_aggregates() {
    let summary: DashboardSummary = serde_json::from_value(json!({
        "totalSpent": 820.4,
        "totalIncome": "3000",
        "totalExpenses": 820.4,
        "savingsRate": 12.5,
        "spendingByCategory": [
            {"category": "groceries", "amount": "350.10"},
            {"category": "dining", "amount": 120},
        ],
    }))
    .unwrap();
    assert!((summary.total_spent - 820.4).abs() < 1e-9);
    assert!((summary.total_income - 3000.0).abs() < 1e-9);
    assert_eq!(summary.spending_by_category.len(), 2);
    assert!((summary.spending_by_category[0].amount - 350.1).abs() < 1e-9);
}

#[test]
fn dashboard_summary_parses_empty_object() {
    let summary: DashboardSummary = serde_json::from_str("{}").unwrap();
    assert_eq!(summary, DashboardSummary::default());
}

// ====== insights and predictions ======

#[test]
fn insight_tolerates_sparse_rows() {
    let insight: Insight = serde_json::from_value(json!({"title": "Spending up"})).unwrap();
    assert_eq!(insight.title, "Spending up");
    assert_eq!(insight.kind, "");
    assert!(!insight.actionable);
}

#[test]
fn prediction_reads_camel_case_keys() {
    let prediction: Prediction = serde_json::from_value(json!({
        "category": "utilities",
        "predictedAmount": 85.2,
        "confidence": 0.74,
    }))
    .unwrap();
    assert!((prediction.predicted_amount - 85.2).abs() < 1e-9);
    assert!((prediction.confidence - 0.74).abs() < 1e-9);
}

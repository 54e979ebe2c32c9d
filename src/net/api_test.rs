use super::*;

// ====== filter query strings ======

#[test]
fn blank_filters_produce_no_query() {
    assert_eq!(TransactionFilters::default().query_string(), "");
}

#[test]
fn single_filter_uses_question_mark() {
    let filters = TransactionFilters {
        category: "dining".to_owned(),
        ..TransactionFilters::default()
    };
    assert_eq!(filters.query_string(), "?category=dining");
}

#[test]
fn multiple_filters_chain_with_ampersands() {
    let filters = TransactionFilters {
        category: "groceries".to_owned(),
        start_date: "2026-01-01".to_owned(),
        end_date: "2026-01-31".to_owned(),
    };
    assert_eq!(
        filters.query_string(),
        "?category=groceries&startDate=2026-01-01&endDate=2026-01-31"
    );
}

#[test]
fn whitespace_only_filters_are_skipped() {
    let filters = TransactionFilters {
        category: "  ".to_owned(),
        start_date: "2026-01-01".to_owned(),
        end_date: String::new(),
    };
    assert_eq!(filters.query_string(), "?startDate=2026-01-01");
}

#[test]
fn date_only_filters_skip_category() {
    let filters = TransactionFilters {
        category: String::new(),
        start_date: String::new(),
        end_date: "2026-01-31".to_owned(),
    };
    assert_eq!(filters.query_string(), "?endDate=2026-01-31");
}

// ====== auth payloads ======

#[test]
fn login_payload_carries_exactly_the_credentials() {
    let payload = login_payload("dana@example.com", "hunter22");
    assert_eq!(
        payload,
        serde_json::json!({ "email": "dana@example.com", "password": "hunter22" })
    );
}

#[test]
fn register_payload_adds_the_name() {
    let payload = register_payload("Dana", "dana@example.com", "hunter22");
    assert_eq!(
        payload,
        serde_json::json!({
            "email": "dana@example.com",
            "password": "hunter22",
            "name": "Dana",
        })
    );
}

// ====== endpoint paths ======

#[test]
fn resource_endpoints_embed_ids() {
    assert_eq!(transaction_endpoint(42), "/transactions/42");
    assert_eq!(budget_endpoint(7), "/budgets/7");
    assert_eq!(goal_endpoint(3), "/goals/3");
}

#[test]
fn predictions_endpoint_carries_horizon() {
    assert_eq!(predictions_endpoint(30), "/predictions?days=30");
    assert_eq!(
        predictions_endpoint(DEFAULT_PREDICTION_DAYS),
        "/predictions?days=30"
    );
}

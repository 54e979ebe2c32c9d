use super::*;

fn budget(spent: f64, limit: f64) -> Budget {
    Budget {
        id: 1,
        category: "groceries".to_owned(),
        limit,
        spent,
    }
}

// ====== usage derivation ======

#[test]
fn usage_under_threshold_is_on_track() {
    let usage = budget_usage(&budget(200.0, 500.0));
    assert!((usage.percent - 40.0).abs() < 1e-9);
    assert!((usage.percent_capped - 40.0).abs() < 1e-9);
    assert!(!usage.warning);
    assert!(!usage.exceeded);
    assert!(usage.over_by.abs() < 1e-9);
}

#[test]
fn usage_at_exactly_eighty_percent_is_still_on_track() {
    let usage = budget_usage(&budget(400.0, 500.0));
    assert!(!usage.warning);
    assert!(!usage.exceeded);
}

#[test]
fn usage_past_eighty_percent_warns() {
    let usage = budget_usage(&budget(450.0, 500.0));
    assert!(usage.warning);
    assert!(!usage.exceeded);
}

#[test]
fn usage_past_limit_sets_both_flags_and_caps_the_bar() {
    let usage = budget_usage(&budget(650.0, 500.0));
    assert!((usage.percent - 130.0).abs() < 1e-9);
    assert!((usage.percent_capped - 100.0).abs() < 1e-9);
    assert!(usage.warning);
    assert!(usage.exceeded);
    assert!((usage.over_by - 150.0).abs() < 1e-9);
}

#[test]
fn usage_with_zero_limit_reads_as_empty() {
    let usage = budget_usage(&budget(120.0, 0.0));
    assert!(usage.percent.abs() < 1e-9);
    assert!(!usage.warning);
    assert!(!usage.exceeded);
}

// ====== status presentation ======

#[test]
fn status_prefers_exceeded_over_warning() {
    let exceeded = budget_usage(&budget(650.0, 500.0));
    assert_eq!(status_label(exceeded), "\u{274c} Exceeded");
    assert_eq!(status_modifier(exceeded), "exceeded");

    let warning = budget_usage(&budget(450.0, 500.0));
    assert_eq!(status_label(warning), "\u{26a0}\u{fe0f} Warning");
    assert_eq!(status_modifier(warning), "warning");

    let ok = budget_usage(&budget(100.0, 500.0));
    assert_eq!(status_label(ok), "\u{2705} On Track");
    assert_eq!(status_modifier(ok), "ok");
}

#[test]
fn spent_of_limit_formats_both_amounts() {
    assert_eq!(spent_of_limit(&budget(1250.5, 2000.0)), "$1,250.50 of $2,000.00");
}

// ====== draft validation ======

#[test]
fn draft_requires_a_category() {
    assert_eq!(build_budget_draft("  ", "100"), Err("Category is required"));
}

#[test]
fn draft_rejects_unparseable_limits() {
    assert_eq!(
        build_budget_draft("dining", "lots"),
        Err("Enter a valid budget limit")
    );
    assert_eq!(build_budget_draft("dining", ""), Err("Enter a valid budget limit"));
}

#[test]
fn draft_rejects_non_positive_limits() {
    assert_eq!(
        build_budget_draft("dining", "0"),
        Err("Budget limit must be greater than zero")
    );
    assert_eq!(
        build_budget_draft("dining", "-25"),
        Err("Budget limit must be greater than zero")
    );
}

#[test]
fn draft_trims_and_keeps_the_parsed_limit() {
    let draft = build_budget_draft(" utilities ", " 340.25 ");
    assert_eq!(
        draft,
        Ok(BudgetDraft {
            category: "utilities".to_owned(),
            limit: 340.25,
        })
    );
}

// ====== category choices ======

#[test]
fn budget_categories_cover_the_tracked_set() {
    let values: Vec<&str> = BUDGET_CATEGORIES.iter().map(|&(value, _)| value).collect();
    assert_eq!(
        values,
        [
            "groceries",
            "dining",
            "entertainment",
            "transportation",
            "utilities",
            "healthcare",
        ]
    );
}

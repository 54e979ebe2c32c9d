use time::macros::date;

use super::*;

fn goal(saved: f64, target: f64, status: &str) -> Goal {
    Goal {
        id: 7,
        name: "Vacation".to_owned(),
        target_amount: target,
        saved_amount: saved,
        deadline: "2026-06-01".to_owned(),
        priority: "high".to_owned(),
        status: status.to_owned(),
    }
}

// ====== progress and deadline math ======

#[test]
fn progress_is_saved_over_target() {
    assert!((goal_progress(&goal(250.0, 1000.0, "active")) - 25.0).abs() < 1e-9);
}

#[test]
fn progress_with_zero_target_reads_as_zero() {
    assert!(goal_progress(&goal(250.0, 0.0, "active")).abs() < 1e-9);
}

#[test]
fn days_left_counts_calendar_days() {
    let today = date!(2026 - 03 - 01);
    assert_eq!(days_left("2026-03-10", today), Some(9));
    assert_eq!(days_left("2026-03-01", today), Some(0));
    assert_eq!(days_left("2026-02-27", today), Some(-2));
}

#[test]
fn days_left_accepts_timestamps_and_rejects_garbage() {
    let today = date!(2026 - 03 - 01);
    assert_eq!(days_left("2026-03-03T00:00:00.000Z", today), Some(2));
    assert_eq!(days_left("soon", today), None);
    assert_eq!(days_left("", today), None);
}

// ====== badges ======

#[test]
fn badge_prefers_completed_even_past_the_deadline() {
    assert_eq!(deadline_badge(true, Some(-30)), "\u{2705} Completed");
    assert_eq!(deadline_badge_modifier(true, Some(-30)), "completed");
}

#[test]
fn badge_marks_overdue_goals() {
    assert_eq!(deadline_badge(false, Some(-1)), "\u{23f0} Overdue");
    assert_eq!(deadline_badge_modifier(false, Some(-1)), "overdue");
}

#[test]
fn badge_counts_down_remaining_days() {
    assert_eq!(deadline_badge(false, Some(12)), "12 days");
    assert_eq!(deadline_badge(false, Some(0)), "0 days");
    assert_eq!(deadline_badge_modifier(false, Some(12)), "active");
}

#[test]
fn badge_handles_missing_deadlines() {
    assert_eq!(deadline_badge(false, None), "No deadline");
    assert_eq!(deadline_badge_modifier(false, None), "active");
}

// ====== monthly target ======

#[test]
fn monthly_target_scales_with_time_remaining() {
    assert!((monthly_target(600.0, 30) - 600.0).abs() < 1e-9);
    assert!((monthly_target(600.0, 60) - 300.0).abs() < 1e-9);
    assert!((monthly_target(600.0, 15) - 1200.0).abs() < 1e-9);
}

#[test]
fn monthly_target_is_zero_once_the_deadline_passed() {
    assert!(monthly_target(600.0, 0).abs() < 1e-9);
    assert!(monthly_target(600.0, -10).abs() < 1e-9);
}

// ====== draft validation ======

#[test]
fn draft_requires_a_name() {
    assert_eq!(
        build_goal_draft("  ", "1000", "2026-06-01", "medium", None),
        Err("Goal name is required")
    );
}

#[test]
fn draft_rejects_bad_target_amounts() {
    assert_eq!(
        build_goal_draft("Vacation", "soon", "2026-06-01", "medium", None),
        Err("Enter a valid target amount")
    );
    assert_eq!(
        build_goal_draft("Vacation", "0", "2026-06-01", "medium", None),
        Err("Target amount must be greater than zero")
    );
}

#[test]
fn draft_requires_a_deadline() {
    assert_eq!(
        build_goal_draft("Vacation", "1000", " ", "medium", None),
        Err("Deadline is required")
    );
}

#[test]
fn new_goals_start_empty_and_active() {
    let draft = build_goal_draft("Vacation", "1000", "2026-06-01", "high", None);
    assert_eq!(
        draft,
        Ok(GoalDraft {
            name: "Vacation".to_owned(),
            target_amount: 1000.0,
            saved_amount: 0.0,
            deadline: "2026-06-01".to_owned(),
            priority: "high".to_owned(),
            status: "active".to_owned(),
        })
    );
}

#[test]
fn editing_keeps_the_saved_amount_and_status() {
    let existing = goal(400.0, 1000.0, "completed");
    let draft =
        build_goal_draft("Vacation", "1500", "2026-09-01", "low", Some(&existing));
    let Ok(draft) = draft else {
        panic!("draft should validate");
    };
    assert!((draft.saved_amount - 400.0).abs() < 1e-9);
    assert_eq!(draft.status, "completed");
    assert!((draft.target_amount - 1500.0).abs() < 1e-9);
}

// ====== progress updates ======

#[test]
fn progress_amount_must_be_a_positive_number() {
    assert_eq!(parse_progress_amount("250"), Ok(250.0));
    assert_eq!(parse_progress_amount(" 12.5 "), Ok(12.5));
    assert_eq!(parse_progress_amount("lots"), Err("Enter a valid amount"));
    assert_eq!(
        parse_progress_amount("0"),
        Err("Enter an amount greater than zero")
    );
    assert_eq!(
        parse_progress_amount("-5"),
        Err("Enter an amount greater than zero")
    );
}

#[test]
fn adding_progress_accumulates_the_saved_amount() {
    let draft = progress_update_draft(&goal(300.0, 1000.0, "active"), 200.0);
    assert!((draft.saved_amount - 500.0).abs() < 1e-9);
    assert_eq!(draft.status, "active");
}

#[test]
fn reaching_the_target_completes_the_goal() {
    let draft = progress_update_draft(&goal(900.0, 1000.0, "active"), 100.0);
    assert!((draft.saved_amount - 1000.0).abs() < 1e-9);
    assert_eq!(draft.status, "completed");
}

#[test]
fn completed_goals_stay_completed() {
    let draft = progress_update_draft(&goal(1200.0, 1000.0, "completed"), 50.0);
    assert_eq!(draft.status, "completed");
}

#[test]
fn zero_target_goals_never_autocomplete() {
    let draft = progress_update_draft(&goal(0.0, 0.0, "active"), 50.0);
    assert_eq!(draft.status, "active");
}

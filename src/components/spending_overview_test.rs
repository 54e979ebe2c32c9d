use super::*;

fn spend(category: &str, amount: f64) -> CategorySpend {
    CategorySpend {
        category: category.to_owned(),
        amount,
    }
}

// ====== circle geometry ======

#[test]
fn zero_fraction_is_twelve_oclock() {
    let (x, y) = point_on_circle(0.0);
    assert!((x - 50.0).abs() < 1e-9);
    assert!((y - 5.0).abs() < 1e-9);
}

#[test]
fn quarter_fraction_is_three_oclock() {
    let (x, y) = point_on_circle(0.25);
    assert!((x - 95.0).abs() < 1e-9);
    assert!((y - 50.0).abs() < 1e-9);
}

#[test]
fn half_fraction_is_six_oclock() {
    let (x, y) = point_on_circle(0.5);
    assert!((x - 50.0).abs() < 1e-9);
    assert!((y - 95.0).abs() < 1e-9);
}

#[test]
fn minor_wedges_use_small_arc_flag() {
    assert!(arc_path(0.0, 0.3).contains(" 0 0 1 "));
}

#[test]
fn major_wedges_use_large_arc_flag() {
    assert!(arc_path(0.0, 0.7).contains(" 0 1 1 "));
}

#[test]
fn wedge_paths_start_at_center() {
    assert!(arc_path(0.1, 0.4).starts_with("M 50 50 L "));
}

// ====== slice construction ======

#[test]
fn no_spending_means_no_slices() {
    assert!(pie_slices(&[]).is_empty());
    assert!(pie_slices(&[spend("groceries", 0.0)]).is_empty());
    assert!(pie_slices(&[spend("refund", -20.0)]).is_empty());
}

#[test]
fn single_category_fills_the_circle() {
    let slices = pie_slices(&[spend("groceries", 120.0)]);
    assert_eq!(slices.len(), 1);
    assert!((slices[0].percent - 100.0).abs() < 1e-9);
    assert_eq!(slices[0].path, full_circle_path());
    assert_eq!(slices[0].color, PALETTE[0]);
}

#[test]
fn equal_categories_split_evenly() {
    let slices = pie_slices(&[spend("groceries", 50.0), spend("dining", 50.0)]);
    assert_eq!(slices.len(), 2);
    assert!((slices[0].percent - 50.0).abs() < 1e-9);
    assert!((slices[1].percent - 50.0).abs() < 1e-9);
    assert_eq!(slices[0].color, PALETTE[0]);
    assert_eq!(slices[1].color, PALETTE[1]);
}

#[test]
fn percents_cover_the_whole_pie() {
    let slices = pie_slices(&[
        spend("groceries", 350.0),
        spend("dining", 120.0),
        spend("utilities", 90.0),
    ]);
    let total: f64 = slices.iter().map(|slice| slice.percent).sum();
    assert!((total - 100.0).abs() < 1e-9);
}

#[test]
fn non_positive_entries_are_dropped_from_mixed_input() {
    let slices = pie_slices(&[
        spend("groceries", 80.0),
        spend("refund", -10.0),
        spend("dining", 20.0),
    ]);
    assert_eq!(slices.len(), 2);
    assert_eq!(slices[0].category, "groceries");
    assert!((slices[0].percent - 80.0).abs() < 1e-9);
}

#[test]
fn palette_cycles_past_six_categories() {
    let entries: Vec<CategorySpend> = (0..7)
        .map(|index| spend(&format!("cat{index}"), 10.0))
        .collect();
    let slices = pie_slices(&entries);
    assert_eq!(slices[6].color, PALETTE[0]);
}

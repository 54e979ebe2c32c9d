use super::*;

// ====== kind presentation ======

#[test]
fn known_kinds_get_their_own_glyphs() {
    assert_eq!(insight_kind_glyph("warning"), "\u{26a0}\u{fe0f}");
    assert_eq!(insight_kind_glyph("achievement"), "\u{2705}");
    assert_eq!(insight_kind_glyph("goal"), "\u{1f4c8}");
    assert_eq!(insight_kind_glyph("tip"), "\u{1f4a1}");
}

#[test]
fn unknown_kinds_render_as_tips() {
    assert_eq!(insight_kind_glyph("surprise"), "\u{1f4a1}");
    assert_eq!(insight_kind_modifier("surprise"), "tip");
    assert_eq!(insight_kind_modifier(""), "tip");
}

#[test]
fn known_kinds_map_to_matching_modifiers() {
    assert_eq!(insight_kind_modifier("warning"), "warning");
    assert_eq!(insight_kind_modifier("achievement"), "achievement");
    assert_eq!(insight_kind_modifier("goal"), "goal");
    assert_eq!(insight_kind_modifier("tip"), "tip");
}

// ====== prediction presentation ======

#[test]
fn category_initial_uppercases_the_first_letter() {
    assert_eq!(category_initial("groceries"), "G");
    assert_eq!(category_initial("  dining"), "D");
    assert_eq!(category_initial(""), "?");
    assert_eq!(category_initial("   "), "?");
}

#[test]
fn confidence_rounds_to_whole_percent() {
    assert_eq!(confidence_percent(0.85), 85);
    assert_eq!(confidence_percent(0.854), 85);
    assert_eq!(confidence_percent(0.855), 86);
    assert_eq!(confidence_percent(0.0), 0);
    assert_eq!(confidence_percent(1.0), 100);
}

#[test]
fn confidence_bar_is_clamped_to_the_track() {
    assert!((confidence_bar_percent(0.6) - 60.0).abs() < 1e-9);
    assert!((confidence_bar_percent(1.4) - 100.0).abs() < 1e-9);
    assert!(confidence_bar_percent(-0.2).abs() < 1e-9);
}

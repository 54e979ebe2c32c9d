//! Pure display helpers shared by every page.
//!
//! DESIGN
//! ======
//! Everything here is a plain function over plain data so the rendering
//! math stays testable on the native target. Dates travel as ISO-8601
//! day strings (`2026-01-05`); parsing is lenient about a trailing time
//! component because some endpoints return full timestamps.

use time::{Date, macros::format_description};

/// US-dollar display with thousands separators, e.g. `-$1,234.56`.
///
/// The sign goes before the `$`. Values that round to zero cents never
/// show a minus sign.
pub fn format_currency(amount: f64) -> String {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let total_cents = (amount.abs() * 100.0).round() as u64;
    let sign = if amount < 0.0 && total_cents > 0 { "-" } else { "" };
    format!(
        "{sign}${}.{:02}",
        group_thousands(total_cents / 100),
        total_cents % 100
    )
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Parse the day part of an ISO-8601 string, tolerating a time suffix.
pub fn parse_iso_date(raw: &str) -> Option<Date> {
    let trimmed = raw.trim();
    let day_part = trimmed.get(..10).unwrap_or(trimmed);
    let format = format_description!("[year]-[month]-[day]");
    Date::parse(day_part, &format).ok()
}

/// Render an ISO date as `Jan 05, 2026`. Unparseable input is returned
/// unchanged so a malformed server value still shows something.
pub fn format_date(raw: &str) -> String {
    let Some(date) = parse_iso_date(raw) else {
        return raw.to_owned();
    };
    let display = format_description!("[month repr:short] [day], [year]");
    date.format(&display).unwrap_or_else(|_| raw.to_owned())
}

/// Share of `total` as a percentage. Non-positive totals yield 0 so
/// empty datasets never divide by zero.
pub fn percent_of(value: f64, total: f64) -> f64 {
    if total > 0.0 { value / total * 100.0 } else { 0.0 }
}

/// Uppercase the first character, leaving the rest alone.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Cut long text at a character boundary and append an ellipsis.
pub fn truncate_text(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_owned();
    }
    let cut: String = text.chars().take(max_chars).collect();
    format!("{cut}...")
}

/// Accent color for a spending category. Unknown categories share the
/// neutral `other` color.
pub fn category_color(category: &str) -> &'static str {
    match category.to_lowercase().as_str() {
        "groceries" => "#22c55e",
        "dining" => "#f97316",
        "entertainment" => "#8b5cf6",
        "transportation" => "#06b6d4",
        "utilities" => "#eab308",
        "healthcare" => "#ef4444",
        "shopping" => "#ec4899",
        "savings" => "#06b6d4",
        _ => "#6b7280",
    }
}

/// Emoji marker for a spending category.
pub fn category_glyph(category: &str) -> &'static str {
    match category.to_lowercase().as_str() {
        "groceries" => "\u{1f6d2}",
        "dining" => "\u{1f37d}\u{fe0f}",
        "entertainment" => "\u{1f3ac}",
        "transportation" => "\u{1f697}",
        "utilities" => "\u{1f4a1}",
        "healthcare" => "\u{2695}\u{fe0f}",
        "shopping" => "\u{1f6cd}\u{fe0f}",
        "savings" => "\u{1f4b0}",
        _ => "\u{1f4e6}",
    }
}

/// Today's date from the browser clock. Outside the browser this is a
/// fixed epoch date; native tests pass their reference date explicitly.
pub fn today() -> Date {
    #[cfg(feature = "csr")]
    {
        let now = js_sys::Date::new_0();
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let (year, month_number, day) = (
            now.get_full_year() as i32,
            now.get_month() as u8 + 1,
            now.get_date() as u8,
        );
        let month = time::Month::try_from(month_number).unwrap_or(time::Month::January);
        Date::from_calendar_date(year, month, day)
            .unwrap_or(time::macros::date!(1970 - 01 - 01))
    }
    #[cfg(not(feature = "csr"))]
    {
        time::macros::date!(1970 - 01 - 01)
    }
}

/// Today's date as an ISO day string, for date input defaults.
pub fn today_iso() -> String {
    let format = format_description!("[year]-[month]-[day]");
    today().format(&format).unwrap_or_default()
}

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

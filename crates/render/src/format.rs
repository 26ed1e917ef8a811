//! Fixed number and text formatting rules.

use serde::Serialize;
use serde_json::Value;

/// `1_500_000` → `"1.5M"`, `2_500` → `"2.5K"`, `999.6` → `"1,000"`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value >= 1_000_000.0 {
        format!("{:.1}M", value / 1_000_000.0)
    } else if value >= 1_000.0 {
        format!("{:.1}K", value / 1_000.0)
    } else {
        group_thousands(value)
    }
}

/// Rounds to an integer and inserts `,` every three digits.
fn group_thousands(value: f64) -> String {
    let digits = format!("{:.0}", value.abs());
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0.0 && digits != "0" {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Up to two decimals, trailing zeros dropped.
fn trim_decimal(value: f64) -> String {
    let fixed = format!("{value:.2}");
    fixed.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Zero counts as non-negative.
pub fn is_non_negative(delta: f64) -> bool {
    delta >= 0.0
}

/// `15.0` → `"+15%"`, `-2.5` → `"-2.5%"`.
pub fn format_delta(delta: f64) -> String {
    // Normalizes -0.0 so it prints as "+0%".
    let delta = if delta == 0.0 { 0.0 } else { delta };
    let sign = if is_non_negative(delta) { "+" } else { "" };
    format!("{sign}{}%", trim_decimal(delta))
}

/// Table cell text: null is empty, strings are bare, everything else is JSON.
pub fn cell_to_string(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        _ => value.to_string(),
    }
}

/// Serializes to JSON that can sit inside a `<script>` element.
pub fn script_safe_json<T: Serialize + ?Sized>(value: &T) -> Result<String, serde_json::Error> {
    let json = serde_json::to_string(value)?;
    let mut safe = String::with_capacity(json.len());
    for c in json.chars() {
        match c {
            '<' => safe.push_str("\\u003c"),
            '>' => safe.push_str("\\u003e"),
            '&' => safe.push_str("\\u0026"),
            '\u{2028}' => safe.push_str("\\u2028"),
            '\u{2029}' => safe.push_str("\\u2029"),
            _ => safe.push(c),
        }
    }
    Ok(safe)
}

/// Keeps a font family name safe to place inside a CSS declaration.
pub fn css_font_family(name: &str) -> String {
    let cleaned: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        "sans-serif".to_string()
    } else {
        format!("'{cleaned}', sans-serif")
    }
}

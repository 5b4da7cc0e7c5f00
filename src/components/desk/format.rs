use num_format::{Locale, ToFormattedString as _};

/// Dollar amount with thousands separators. Cents are shown only when the
/// amount is fractional (`$2,340`, `$5.50`).
pub fn format_currency(amount: f64) -> String {
    let cents = (amount * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    let dollars = (cents / 100).to_formatted_string(&Locale::en);
    match cents % 100 {
        0 => format!("{}${}", sign, dollars),
        fraction => format!("{}${}.{:02}", sign, dollars, fraction),
    }
}

/// `part / whole` with one decimal (`87.3%`); `0.0%` when `whole` is zero.
pub fn format_percent(part: f64, whole: f64) -> String {
    if whole == 0.0 || !whole.is_finite() || !part.is_finite() {
        return "0.0%".to_string();
    }
    format!("{:.1}%", part / whole * 100.0)
}

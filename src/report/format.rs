//! Display formatting for report figures.

/// Formats whole dollars with a leading `$` and comma thousands separators.
///
/// # Examples
///
/// ```
/// use headcount_engine::report::format_usd;
///
/// assert_eq!(format_usd(0), "$0");
/// assert_eq!(format_usd(999), "$999");
/// assert_eq!(format_usd(1234567), "$1,234,567");
/// ```
pub fn format_usd(amount: u128) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    grouped.push('$');

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Formats the selected-versus-roster headcount, e.g. `10/250`.
pub fn format_headcount(selected: usize, total: usize) -> String {
    format!("{selected}/{total}")
}

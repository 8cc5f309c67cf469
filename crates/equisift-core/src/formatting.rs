//! Helpers for presenting numeric metric values.

/// Render an optional metric for display.
///
/// Absent values render as `"-"`. Values with absolute value >= 1 are
/// comma-grouped with two decimals; smaller values keep four decimals so
/// fractional yields do not round to zero.
pub fn format_metric(value: Option<f64>) -> String {
    match value {
        None => String::from("-"),
        Some(value) if value.abs() >= 1.0 => format_grouped(value, 2),
        Some(value) => format!("{value:.4}"),
    }
}

/// Comma-group the integer part of `value`, keeping `decimals` places.
pub fn format_grouped(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value.abs());
    let (whole, frac) = match formatted.split_once('.') {
        Some((whole, frac)) => (whole, Some(frac)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (index, ch) in whole.chars().enumerate() {
        if index > 0 && (whole.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 { "-" } else { "" };
    match frac {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

//! Number formatting shared by the results table and the exporters.

use crate::constants::NOT_AVAILABLE;

/// Format a value with exactly two decimal places.
///
/// Rounds half away from zero on the exact binary value of the `f64`, which gives
/// the same digits as JavaScript's `toFixed(2)`. Negative zero prints as `0.00`,
/// while small negative values keep their sign (`-0.001` prints as `-0.00`).
#[must_use]
pub fn format_fixed2(value: f64) -> String {
    let value = if value == 0.0 { 0.0 } else { value };

    // A value sits exactly halfway between two hundredths only when it is an odd
    // number of eighths (0.125, 0.375, ...). Rust's formatter breaks those ties to
    // even, so they are rounded here on the decimal digits. The fraction is then one
    // of .125/.375/.625/.875, which never carries into the integer part, and both
    // `trunc` and `fract` are exact.
    let eighths = value * 8.0;
    if eighths.is_finite() && eighths.fract() == 0.0 && eighths.rem_euclid(2.0) == 1.0 {
        let sign = if value < 0.0 { "-" } else { "" };
        let whole = value.abs().trunc();
        let cents = (value.abs().fract() * 100.0).round();
        return format!("{sign}{whole:.0}.{cents:02.0}");
    }

    format!("{:.2}", value)
}

/// Format an optional score, using `N/A` when the service did not return one.
#[must_use]
pub fn format_score(value: Option<f64>) -> String {
    match value {
        Some(v) => format_fixed2(v),
        None => NOT_AVAILABLE.to_string(),
    }
}

//! Percentage math shared by the per-module reports and the bundle totals.
//!
//! All results are rounded to two decimals and are always finite: a zero
//! denominator yields `0.0` instead of NaN or infinity.

/// Round to two decimal places.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Percentage shrink from `original` to `rendered`, never negative.
///
/// Returns `0.0` when `original` is zero.
pub fn reduction(rendered: u64, original: u64) -> f64 {
    if original == 0 {
        return 0.0;
    }
    let pct = round2(100.0 - (rendered as f64 / original as f64) * 100.0);
    // Rounding a tiny negative gives -0.0, which must not reach the report
    if pct <= 0.0 { 0.0 } else { pct }
}

/// Share of `total` taken by `size`, clamped to at most 100.
///
/// Returns `0.0` when `total` is zero.
pub fn percent_of(size: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2((size as f64 / total as f64) * 100.0).min(100.0)
}

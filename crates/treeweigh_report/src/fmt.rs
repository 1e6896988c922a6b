//! Size and percentage formatting for the text report.

const UNIT: u64 = 1000;
/// Scaled sizes keep three decimals
const PRECISION: f64 = 1000.0;
const SIZES: &[&str] = &["Bytes", "KB", "MB", "GB"];

/// Format bytes on a decimal (powers of 1000) scale.
///
/// Scaled values are rounded half up to three decimals, trailing zeros dropped;
/// GB is the largest unit. Zero is rendered in the singular.
///
/// # Examples
///
/// ```
/// use treeweigh_report::format_bytes;
///
/// assert_eq!(format_bytes(0), "0 Byte");
/// assert_eq!(format_bytes(512), "512 Bytes");
/// assert_eq!(format_bytes(1000), "1 KB");
/// assert_eq!(format_bytes(1_500_000), "1.5 MB");
/// ```
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Byte".to_string();
    }

    let mut exp = 0;
    let mut divisor = 1u64;
    while exp + 1 < SIZES.len() && bytes / divisor >= UNIT {
        divisor *= UNIT;
        exp += 1;
    }

    if exp == 0 {
        return format!("{} {}", bytes, SIZES[0]);
    }

    let scaled = (bytes as f64 / divisor as f64 * PRECISION).round() / PRECISION;
    format!("{} {}", scaled, SIZES[exp])
}

/// Render a percentage the way it reads in the report: `50`, `33.33`.
pub fn format_percent(value: f64) -> String {
    value.to_string()
}

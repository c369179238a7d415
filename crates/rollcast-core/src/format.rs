//! Fixed-point decimal rendering.
//!
//! One rendering is used everywhere: printed values, string filters, and
//! statistic lines all go through [`format_fixed`], so a filter match is
//! always a match against exactly what the user sees.

/// Maximum fractional digits a value can carry through a decimal
/// round-trip (`max_digits10` for a 64-bit float). Also the default
/// output precision.
pub const MAX_PRECISION: u32 = 17;

/// Renders a value as fixed-point decimal with `precision` fractional
/// digits, e.g. `format_fixed(0.5, 2)` is `"0.50"`.
pub fn format_fixed(value: f64, precision: u32) -> String {
    let precision = precision as usize;
    format!("{value:.precision$}")
}

/// True when `entry` can occur inside a rendered value: ASCII digits with
/// at most one decimal point. The empty string is a legal (always
/// matching) fragment.
pub fn is_numeric_fragment(entry: &str) -> bool {
    let mut dots = 0usize;
    for ch in entry.chars() {
        match ch {
            '0'..='9' => {}
            '.' => dots += 1,
            _ => return false,
        }
    }
    dots <= 1
}

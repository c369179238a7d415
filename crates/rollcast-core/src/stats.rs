//! Descriptive statistics over the accepted sequence.
//!
//! Every helper returns `None` on an empty slice; the reporter skips the
//! whole statistics block in that case instead of printing placeholders.

/// Smallest and largest values by linear scan.
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let (&first, rest) = values.split_first()?;
    let mut min = first;
    let mut max = first;
    for &value in rest {
        if value < min {
            min = value;
        }
        if value > max {
            max = value;
        }
    }
    Some((min, max))
}

/// Arithmetic mean.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Median by order selection; even lengths average the two central
/// elements.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut scratch = values.to_vec();
    let mid = scratch.len() / 2;
    let (below, upper_mid, _) = scratch.select_nth_unstable_by(mid, f64::total_cmp);
    let upper_mid = *upper_mid;
    if values.len() % 2 == 1 {
        Some(upper_mid)
    } else {
        // The largest element ordered before the midpoint is the lower of
        // the two central values.
        let lower_mid = below.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some((lower_mid + upper_mid) / 2.0)
    }
}

/// Population variance (divisor N).
pub fn variance(values: &[f64]) -> Option<f64> {
    let mean = mean(values)?;
    let sum_sq: f64 = values
        .iter()
        .map(|value| {
            let delta = value - mean;
            delta * delta
        })
        .sum();
    Some(sum_sq / values.len() as f64)
}

/// Population standard deviation.
pub fn std_dev(values: &[f64]) -> Option<f64> {
    variance(values).map(f64::sqrt)
}

/// Coefficient of variation: standard deviation over mean. Follows IEEE
/// division semantics when the mean is zero.
pub fn coef_variation(values: &[f64]) -> Option<f64> {
    let std = std_dev(values)?;
    let mean = mean(values)?;
    Some(std / mean)
}

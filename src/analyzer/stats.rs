//! Small numeric helpers shared by the aggregator and the chart labels.

/// Whole-number percentage of `count` over `total`, ties to even.
/// Returns 0 if `total` is 0.
pub fn percent_rounded(count: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (100.0 * count as f64 / total as f64).round_ties_even() as u32
}

/// Sum of `values`. Returns 0.0 for an empty iterator.
pub fn total(values: impl IntoIterator<Item = f64>) -> f64 {
    values.into_iter().sum()
}

/// Render an accounted-time figure with at most two decimals and without a
/// trailing `.0` when whole.
pub fn format_quantity(v: f64) -> String {
    // `+ 0.0` turns a negative zero into a plain zero.
    let v = (v * 100.0).round() / 100.0 + 0.0;
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{:.2}", v)
            .trim_end_matches('0')
            .trim_end_matches('.')
            .to_string()
    }
}

/// Arithmetic mean as a real number. `None` for empty input.
pub fn mean(values: &[i32]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: i64 = values.iter().map(|&v| i64::from(v)).sum();
    Some(sum as f64 / values.len() as f64)
}

/// Median of an ascending slice. `None` for empty input.
///
/// Odd lengths take the middle element, even lengths average the two middle
/// elements in floating point.
pub fn median(sorted: &[i32]) -> Option<f64> {
    let len = sorted.len();
    if len == 0 {
        return None;
    }

    let median = if len % 2 == 0 {
        let mid = len / 2;
        (f64::from(sorted[mid - 1]) + f64::from(sorted[mid])) / 2.0
    } else {
        f64::from(sorted[len / 2])
    };

    Some(median)
}

//! Basic moments of a series.
//!
//! All moments are population moments (divide by n), matching the
//! normalisation of the cross-correlation function.

/// Returns the arithmetic mean, or NaN for an empty series.
pub fn mean(series: &[f64]) -> f64 {
    if series.is_empty() {
        return f64::NAN;
    }
    series.iter().sum::<f64>() / series.len() as f64
}

/// Returns the population variance, or NaN for an empty series.
pub fn variance(series: &[f64]) -> f64 {
    if series.is_empty() {
        return f64::NAN;
    }
    let m = mean(series);
    series.iter().map(|x| (x - m).powi(2)).sum::<f64>() / series.len() as f64
}

/// Returns the population standard deviation.
pub fn standard_deviation(series: &[f64]) -> f64 {
    variance(series).sqrt()
}

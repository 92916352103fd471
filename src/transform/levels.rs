//! Level transforms: natural log, HP-detrended log and identity.
//!
//! These functions never validate their input. Non-positive values follow
//! IEEE semantics (`ln(0) = -inf`, `ln(-1) = NaN`) and flow through to the
//! caller; use [`TransformKind::apply`](super::TransformKind::apply) with
//! [`DomainPolicy::Reject`](super::DomainPolicy::Reject) to fail instead.

use crate::error::Result;
use crate::trend::HPFilter;

/// Natural logarithm of each observation.
pub fn log_levels(series: &[f64]) -> Vec<f64> {
    series.iter().map(|x| x.ln()).collect()
}

/// Returns the series unchanged.
pub fn identity(series: &[f64]) -> Vec<f64> {
    series.to_vec()
}

/// Cyclical component of `ln(1 + x)` after removing an HP trend with the
/// default smoothing parameter (1600).
///
/// The `1 + x` shift keeps zero observations finite.
///
/// # Errors
/// [`PrepError::EmptyData`](crate::PrepError::EmptyData) for an empty series.
pub fn detrended_log(series: &[f64]) -> Result<Vec<f64>> {
    detrended_log_with(series, &HPFilter::default())
}

/// [`detrended_log`] with an explicit filter.
pub fn detrended_log_with(series: &[f64], filter: &HPFilter) -> Result<Vec<f64>> {
    let log_x: Vec<f64> = series.iter().map(|x| x.ln_1p()).collect();
    let result = filter.decompose(&log_x)?;
    Ok(result.cycle)
}

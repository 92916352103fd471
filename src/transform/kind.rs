//! The closed set of series transforms and their dispatch.

use super::config::{DomainPolicy, TransformConfig};
use super::difference::annualized_log_difference_with;
use super::levels::{detrended_log_with, identity, log_levels};
use crate::error::{PrepError, Result};
use std::fmt;
use std::str::FromStr;

/// One of the four series transforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransformKind {
    /// Annualized log growth rate, `diff(ln x) * factor`.
    AnnualizedLogDiff,
    /// Cyclical component of `ln(1 + x)` after HP detrending.
    DetrendedLog,
    /// Natural logarithm.
    Log,
    /// No transformation.
    Identity,
}

impl TransformKind {
    pub const ALL: [TransformKind; 4] = [
        TransformKind::AnnualizedLogDiff,
        TransformKind::DetrendedLog,
        TransformKind::Log,
        TransformKind::Identity,
    ];

    /// Conventional short name of the transform.
    pub fn as_str(self) -> &'static str {
        match self {
            TransformKind::AnnualizedLogDiff => "mult_diff_logs",
            TransformKind::DetrendedLog => "no_trend_logs",
            TransformKind::Log => "log",
            TransformKind::Identity => "id_trans",
        }
    }

    /// Length of the output for an input of length `n`.
    pub fn output_len(self, n: usize, config: &TransformConfig) -> usize {
        match self {
            TransformKind::AnnualizedLogDiff => config.difference_policy.output_len(n),
            _ => n,
        }
    }

    /// Apply the transform to a series.
    ///
    /// # Errors
    /// - [`PrepError::NonPositiveInput`] under [`DomainPolicy::Reject`]
    /// - [`PrepError::EmptyData`] when detrending an empty series
    /// - errors from the HP filter for an invalid lambda
    pub fn apply(self, series: &[f64], config: &TransformConfig) -> Result<Vec<f64>> {
        if let Some((index, value)) = self.first_out_of_domain(series) {
            match config.domain_policy {
                DomainPolicy::Reject => {
                    return Err(PrepError::NonPositiveInput { index, value });
                }
                DomainPolicy::Propagate => {
                    log::warn!(
                        "{}: value {} at index {} is outside the log domain; output will be non-finite",
                        self,
                        value,
                        index
                    );
                }
            }
        }

        match self {
            TransformKind::AnnualizedLogDiff => Ok(annualized_log_difference_with(
                series,
                config.annualization,
                config.difference_policy,
            )),
            TransformKind::DetrendedLog => detrended_log_with(series, &config.hp_filter()),
            TransformKind::Log => Ok(log_levels(series)),
            TransformKind::Identity => Ok(identity(series)),
        }
    }

    /// First observation the transform's logarithm is undefined or infinite for.
    ///
    /// NaN observations are missing data, not domain violations.
    fn first_out_of_domain(self, series: &[f64]) -> Option<(usize, f64)> {
        let invalid: fn(f64) -> bool = match self {
            TransformKind::AnnualizedLogDiff | TransformKind::Log => |x| x <= 0.0,
            TransformKind::DetrendedLog => |x| x <= -1.0,
            TransformKind::Identity => return None,
        };
        series
            .iter()
            .copied()
            .enumerate()
            .find(|&(_, x)| invalid(x))
    }
}

impl fmt::Display for TransformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TransformKind {
    type Err = PrepError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "mult_diff_logs" | "annualized_log_diff" => Ok(TransformKind::AnnualizedLogDiff),
            "no_trend_logs" | "detrended_log" => Ok(TransformKind::DetrendedLog),
            "log" => Ok(TransformKind::Log),
            "id_trans" | "identity" => Ok(TransformKind::Identity),
            other => Err(PrepError::InvalidParameter(format!(
                "unknown transform '{}'",
                other
            ))),
        }
    }
}

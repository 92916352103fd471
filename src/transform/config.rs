//! Configuration shared by the transform dispatch.

use super::difference::{DifferencePolicy, MONTHLY_ANNUALIZATION};
use crate::core::Frequency;
use crate::trend::{HPFilter, DEFAULT_LAMBDA};

/// How log-based transforms treat observations outside their domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DomainPolicy {
    /// Compute anyway; `ln(0)` gives `-inf` and negative input gives NaN.
    #[default]
    Propagate,
    /// Fail with [`PrepError::NonPositiveInput`](crate::PrepError::NonPositiveInput)
    /// at the first offending observation.
    Reject,
}

/// Parameters for [`TransformKind::apply`](super::TransformKind::apply).
///
/// The defaults reproduce the classic monthly setup: growth rates annualized
/// with a factor of 1200, HP smoothing parameter 1600, first difference
/// dropped, and out-of-domain values propagated.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformConfig {
    /// Multiplier for log differences.
    pub annualization: f64,
    /// HP smoothing parameter for detrending.
    pub hp_lambda: f64,
    /// Boundary handling for the differencing transform.
    pub difference_policy: DifferencePolicy,
    /// Treatment of non-positive input to log transforms.
    pub domain_policy: DomainPolicy,
}

impl Default for TransformConfig {
    fn default() -> Self {
        Self {
            annualization: MONTHLY_ANNUALIZATION,
            hp_lambda: DEFAULT_LAMBDA,
            difference_policy: DifferencePolicy::Drop,
            domain_policy: DomainPolicy::Propagate,
        }
    }
}

impl TransformConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration matched to a sampling frequency: annualization factor
    /// and Ravn-Uhlig HP lambda.
    pub fn for_frequency(frequency: Frequency) -> Self {
        Self {
            annualization: frequency.annualization_factor(),
            hp_lambda: frequency.hp_lambda(),
            ..Self::default()
        }
    }

    pub fn with_annualization(mut self, factor: f64) -> Self {
        self.annualization = factor;
        self
    }

    pub fn with_hp_lambda(mut self, lambda: f64) -> Self {
        self.hp_lambda = lambda;
        self
    }

    pub fn with_difference_policy(mut self, policy: DifferencePolicy) -> Self {
        self.difference_policy = policy;
        self
    }

    pub fn with_domain_policy(mut self, policy: DomainPolicy) -> Self {
        self.domain_policy = policy;
        self
    }

    /// HP filter built from this configuration.
    pub fn hp_filter(&self) -> HPFilter {
        HPFilter::new(self.hp_lambda)
    }
}

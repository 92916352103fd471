//! Descriptive statistics for detrended macro series.
//!
//! # Example
//!
//! ```
//! use macroprep::features::{cross_correlation, CycleMoments};
//!
//! let omega = 2.0 * std::f64::consts::PI / 16.0;
//! let output: Vec<f64> = (0..64).map(|i| (omega * i as f64).sin()).collect();
//! let hours: Vec<f64> = (0..64).map(|i| 0.8 * (omega * (i as f64 - 1.0)).sin()).collect();
//!
//! let ccf = cross_correlation(&hours, &output, 4).unwrap();
//! assert_eq!(ccf.len(), 4);
//!
//! let moments = CycleMoments::compute(&hours, &output, 4).unwrap();
//! assert_eq!(moments.peak_lag, 1);
//! ```

pub mod basic;
pub mod correlation;
pub mod cycle;

pub use basic::{mean, standard_deviation, variance};
pub use correlation::{autocorrelation, correlation, cross_correlation, lagged_correlation};
pub use cycle::CycleMoments;

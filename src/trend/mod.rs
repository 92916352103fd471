//! Trend extraction for macro series.
//!
//! - [`HPFilter`]: Hodrick-Prescott filter splitting a series into a smooth
//!   trend and a cyclical remainder
//!
//! # Example
//!
//! ```
//! use macroprep::trend::HPFilter;
//!
//! let series: Vec<f64> = (0..40).map(|i| (i as f64 * 0.3).sin() + 0.1 * i as f64).collect();
//! let result = HPFilter::default().decompose(&series).unwrap();
//! assert_eq!(result.cycle.len(), series.len());
//! ```

mod hp;

pub use hp::{HPFilter, HPResult, DEFAULT_LAMBDA};

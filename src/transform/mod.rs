//! Series transformations applied before business-cycle analysis.
//!
//! Provides the four level transforms, the [`TransformKind`] dispatch enum
//! and the [`TransformTable`] assigning a transform to each series name.
//!
//! # Example
//!
//! ```
//! use macroprep::transform::{annualized_log_difference, TransformConfig, TransformTable};
//!
//! let table = TransformTable::fred_md();
//! let config = TransformConfig::default();
//!
//! // Interest rates pass through untouched
//! let rate = vec![5.25, 5.0, 4.75];
//! assert_eq!(table.apply("interest_rate", &rate, &config).unwrap(), rate);
//!
//! // Monthly levels to annualized growth
//! let growth = annualized_log_difference(&[100.0, 100.0, 100.0]);
//! assert_eq!(growth, vec![0.0, 0.0]);
//! ```

pub mod config;
pub mod difference;
pub mod kind;
pub mod levels;
pub mod table;

pub use config::{DomainPolicy, TransformConfig};
pub use difference::{
    annualized_log_difference, annualized_log_difference_with, difference,
    inverse_annualized_log_difference, DifferencePolicy, MONTHLY_ANNUALIZATION,
};
pub use kind::TransformKind;
pub use levels::{detrended_log, detrended_log_with, identity, log_levels};
pub use table::TransformTable;

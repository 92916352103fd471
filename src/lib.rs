//! # macroprep
//!
//! Preparation helpers for macroeconomic panels such as FRED-MD.
//!
//! Renames raw series codes to descriptive names, applies the transform each
//! series calls for (annualized log growth, Hodrick-Prescott detrended logs,
//! plain logs or nothing), and summarises the resulting cycles.
//!
//! The lookup tables are plain values: build them once and pass them to the
//! code that needs them.
//!
//! ```
//! use macroprep::prelude::*;
//!
//! let names = NameMapper::fred_md();
//! let transforms = TransformTable::fred_md();
//! let config = TransformConfig::default();
//!
//! let name = names.lookup("GDPC1").unwrap();
//! let gdp: Vec<f64> = (0..40).map(|t| 100.0 * 1.005_f64.powi(t)).collect();
//! let cycle = transforms.apply(name, &gdp, &config).unwrap();
//! assert_eq!(cycle.len(), gdp.len());
//! ```

// Allow some clippy warnings for cleaner code in specific cases
#![allow(clippy::upper_case_acronyms)]
#![allow(clippy::needless_range_loop)]

pub mod core;
pub mod error;
pub mod features;
pub mod names;
pub mod transform;
pub mod trend;
pub mod utils;

pub use error::{PrepError, Result};

pub mod prelude {
    pub use crate::core::{Frequency, MacroFrame};
    pub use crate::error::{PrepError, Result};
    pub use crate::features::CycleMoments;
    pub use crate::names::NameMapper;
    pub use crate::transform::{
        DifferencePolicy, DomainPolicy, TransformConfig, TransformKind, TransformTable,
    };
    pub use crate::trend::HPFilter;
}

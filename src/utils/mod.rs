//! Numerical utilities.

pub mod banded;

pub use banded::SymmetricPentadiagonal;

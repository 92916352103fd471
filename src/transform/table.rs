//! Assignment of transforms to series names.

use super::config::TransformConfig;
use super::kind::TransformKind;
use crate::error::{PrepError, Result};
use std::collections::HashMap;

/// Default series name to transform pairs for business-cycle work.
///
/// Per-capita (`_cap`) variants share the transform of their aggregate.
const FRED_MD_TRANSFORMS: [(&str, TransformKind); 14] = [
    ("gdp", TransformKind::DetrendedLog),
    ("gdp_cap", TransformKind::DetrendedLog),
    ("employment", TransformKind::DetrendedLog),
    ("productivity", TransformKind::DetrendedLog),
    ("non_durable_consumption", TransformKind::DetrendedLog),
    ("durable_consumption", TransformKind::DetrendedLog),
    ("consumption", TransformKind::DetrendedLog),
    ("consumption_cap", TransformKind::DetrendedLog),
    ("investment", TransformKind::DetrendedLog),
    ("investment_cap", TransformKind::DetrendedLog),
    ("all_hours", TransformKind::DetrendedLog),
    ("avg_hours", TransformKind::DetrendedLog),
    ("average_hourly_earnings", TransformKind::DetrendedLog),
    // Already a rate.
    ("interest_rate", TransformKind::Identity),
];

/// Read-only mapping from series names to the transform applied to them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TransformTable {
    entries: HashMap<String, TransformKind>,
}

impl TransformTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Table for the renamed FRED-MD business-cycle variables.
    pub fn fred_md() -> Self {
        FRED_MD_TRANSFORMS.iter().copied().collect()
    }

    /// Assign a transform to a series, returning the previous assignment.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        kind: TransformKind,
    ) -> Option<TransformKind> {
        self.entries.insert(name.into(), kind)
    }

    /// Transform assigned to a series.
    ///
    /// # Errors
    /// [`PrepError::UnknownSeries`] when the name is not in the table.
    pub fn lookup(&self, name: &str) -> Result<TransformKind> {
        self.entries
            .get(name)
            .copied()
            .ok_or_else(|| PrepError::UnknownSeries(name.to_string()))
    }

    /// Look up the transform for `name` and apply it to `series`.
    pub fn apply(
        &self,
        name: &str,
        series: &[f64],
        config: &TransformConfig,
    ) -> Result<Vec<f64>> {
        let kind = self.lookup(name)?;
        log::debug!("applying {} to '{}' ({} observations)", kind, name, series.len());
        kind.apply(series, config)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(name, kind)` pairs sorted by name.
    pub fn iter(&self) -> impl Iterator<Item = (&str, TransformKind)> {
        let mut pairs: Vec<(&str, TransformKind)> = self
            .entries
            .iter()
            .map(|(name, &kind)| (name.as_str(), kind))
            .collect();
        pairs.sort_unstable_by(|a, b| a.0.cmp(b.0));
        pairs.into_iter()
    }
}

impl<K: Into<String>> FromIterator<(K, TransformKind)> for TransformTable {
    fn from_iter<I: IntoIterator<Item = (K, TransformKind)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, kind)| (name.into(), kind))
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transform::identity;

    #[test]
    fn fred_md_covers_fourteen_series() {
        let table = TransformTable::fred_md();
        assert_eq!(table.len(), 14);
        assert_eq!(table.lookup("gdp").unwrap(), TransformKind::DetrendedLog);
        assert_eq!(table.lookup("interest_rate").unwrap(), TransformKind::Identity);
    }

    #[test]
    fn per_capita_variants_share_transform() {
        let table = TransformTable::fred_md();
        for base in ["gdp", "consumption", "investment"] {
            let cap = format!("{}_cap", base);
            assert_eq!(table.lookup(base).unwrap(), table.lookup(&cap).unwrap());
        }
    }

    #[test]
    fn unknown_series_is_an_error() {
        let table = TransformTable::fred_md();
        assert_eq!(
            table.lookup("population"),
            Err(PrepError::UnknownSeries("population".to_string()))
        );
        assert!(table
            .apply("BOGUS", &[1.0], &TransformConfig::default())
            .is_err());
    }

    #[test]
    fn interest_rate_equals_identity() {
        let table = TransformTable::fred_md();
        let series = vec![5.25, 0.0, -0.1, 3.75, f64::INFINITY];
        let out = table
            .apply("interest_rate", &series, &TransformConfig::default())
            .unwrap();
        assert_eq!(out, identity(&series));
    }

    #[test]
    fn apply_detrends_gdp() {
        let table = TransformTable::fred_md();
        let series: Vec<f64> = (0..30).map(|t| 1000.0 + 10.0 * t as f64).collect();
        let out = table
            .apply("gdp", &series, &TransformConfig::default())
            .unwrap();
        assert_eq!(out.len(), series.len());
        assert!(out.iter().all(|c| c.abs() < 0.05));
    }

    #[test]
    fn insert_overrides_assignment() {
        let mut table = TransformTable::fred_md();
        let previous = table.insert("interest_rate", TransformKind::AnnualizedLogDiff);
        assert_eq!(previous, Some(TransformKind::Identity));
        assert_eq!(
            table.lookup("interest_rate").unwrap(),
            TransformKind::AnnualizedLogDiff
        );

        let mut empty = TransformTable::new();
        assert!(empty.is_empty());
        empty.insert("cpi", TransformKind::Log);
        assert!(empty.contains("cpi"));
    }

    #[test]
    fn iteration_is_sorted_by_name() {
        let table = TransformTable::fred_md();
        let names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
    }
}

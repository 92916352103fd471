//! Renaming of raw series identifiers to descriptive names.
//!
//! FRED-MD and FRED-QD publish their columns under short mnemonics
//! (`GDPC1`, `CE16OV`, ...). [`NameMapper`] maps those codes to the lowercase
//! names used by the transform table and downstream analysis.
//!
//! # Example
//!
//! ```
//! use macroprep::names::NameMapper;
//!
//! let mapper = NameMapper::fred_md();
//! assert_eq!(mapper.lookup("GPDIC1").unwrap(), "investment");
//! assert!(mapper.lookup("BOGUS").is_err());
//! ```

use crate::error::{PrepError, Result};
use std::collections::HashMap;

/// Default identifier to name pairs for the FRED-MD/QD columns in use.
const FRED_MD_NAMES: [(&str, &str); 13] = [
    ("GDPC1", "gdp"),
    ("PCNDx", "non_durable_consumption"),
    ("PCDGx", "durable_consumption"),
    ("GPDIC1", "investment"),
    ("HOABS", "all_bus_hours"),
    ("HOAMS", "all_manuf_hours"),
    ("HOANBS", "all_nonfarm_hours"),
    // Average weekly hours in manufacturing.
    ("AWHMAN", "avg_hours"),
    ("AWHNONAG", "avg_private_hours"),
    ("AHETPIx", "average_hourly_earnings"),
    ("CE16OV", "employment"),
    ("POPTHM", "population"),
    ("DFF", "interest_rate"),
];

/// Read-only mapping from series identifiers to series names.
///
/// Identifiers are case-sensitive. Build one with [`NameMapper::fred_md`] and
/// pass it to whatever needs it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameMapper {
    entries: HashMap<String, String>,
}

impl NameMapper {
    /// Create an empty mapper.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mapper for the FRED-MD columns used in business-cycle work.
    pub fn fred_md() -> Self {
        FRED_MD_NAMES.iter().copied().collect()
    }

    /// Add or replace a mapping, returning the previous name if any.
    pub fn insert(
        &mut self,
        identifier: impl Into<String>,
        name: impl Into<String>,
    ) -> Option<String> {
        self.entries.insert(identifier.into(), name.into())
    }

    /// Look up the descriptive name for an identifier.
    ///
    /// # Errors
    /// [`PrepError::UnknownIdentifier`] when the identifier is not mapped.
    pub fn lookup(&self, identifier: &str) -> Result<&str> {
        self.entries
            .get(identifier)
            .map(String::as_str)
            .ok_or_else(|| PrepError::UnknownIdentifier(identifier.to_string()))
    }

    /// Reverse lookup: the identifier that maps to `name`.
    ///
    /// The default table is injective; if a caller inserted several
    /// identifiers for one name, the alphabetically first is returned.
    pub fn identifier_for(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .filter(|(_, n)| n.as_str() == name)
            .map(|(id, _)| id.as_str())
            .min()
    }

    pub fn contains(&self, identifier: &str) -> bool {
        self.entries.contains_key(identifier)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(identifier, name)` pairs sorted by identifier.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        let mut pairs: Vec<(&str, &str)> = self
            .entries
            .iter()
            .map(|(id, name)| (id.as_str(), name.as_str()))
            .collect();
        pairs.sort_unstable();
        pairs.into_iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for NameMapper {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(id, name)| (id.into(), name.into()))
                .collect(),
        }
    }
}

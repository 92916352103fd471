//! Sampling frequency of macro series.

use crate::error::PrepError;
use std::fmt;
use std::str::FromStr;

/// Observation frequency of a series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Frequency {
    Annual,
    Quarterly,
    #[default]
    Monthly,
}

impl Frequency {
    /// Number of observations per year.
    pub fn periods_per_year(self) -> usize {
        match self {
            Frequency::Annual => 1,
            Frequency::Quarterly => 4,
            Frequency::Monthly => 12,
        }
    }

    /// Factor turning a period-over-period log difference into an annualized
    /// percentage (1200 for monthly data).
    pub fn annualization_factor(self) -> f64 {
        self.periods_per_year() as f64 * 100.0
    }

    /// Hodrick-Prescott smoothing parameter from the Ravn-Uhlig rule:
    /// `1600 * (periods_per_year / 4)^4`.
    pub fn hp_lambda(self) -> f64 {
        1600.0 * (self.periods_per_year() as f64 / 4.0).powi(4)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Frequency::Annual => "annual",
            Frequency::Quarterly => "quarterly",
            Frequency::Monthly => "monthly",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = PrepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "a" | "y" | "annual" | "yearly" => Ok(Frequency::Annual),
            "q" | "quarterly" => Ok(Frequency::Quarterly),
            "m" | "monthly" => Ok(Frequency::Monthly),
            other => Err(PrepError::InvalidParameter(format!(
                "unknown frequency '{}'",
                other
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn ravn_uhlig_lambdas() {
        assert_relative_eq!(Frequency::Annual.hp_lambda(), 6.25);
        assert_relative_eq!(Frequency::Quarterly.hp_lambda(), 1600.0);
        assert_relative_eq!(Frequency::Monthly.hp_lambda(), 129_600.0);
    }

    #[test]
    fn annualization_factors() {
        assert_relative_eq!(Frequency::Monthly.annualization_factor(), 1200.0);
        assert_relative_eq!(Frequency::Quarterly.annualization_factor(), 400.0);
        assert_relative_eq!(Frequency::Annual.annualization_factor(), 100.0);
    }

    #[test]
    fn parses_common_spellings() {
        assert_eq!("M".parse::<Frequency>().unwrap(), Frequency::Monthly);
        assert_eq!("quarterly".parse::<Frequency>().unwrap(), Frequency::Quarterly);
        assert_eq!("Annual".parse::<Frequency>().unwrap(), Frequency::Annual);
        assert!("weekly".parse::<Frequency>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for freq in [Frequency::Annual, Frequency::Quarterly, Frequency::Monthly] {
            assert_eq!(freq.to_string().parse::<Frequency>().unwrap(), freq);
        }
    }
}

//! Metrics available for coloring the map.

use std::fmt;
use std::str::FromStr;

use serde_json::json;

use super::stats::EntityStats;
use crate::error::AppError;

/// Aggregate metric selectable in the dashboard's map dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Metric {
    #[default]
    PrimaryCount,
    SecondaryCount,
    TotalCount,
}

impl Metric {
    pub const ALL: [Metric; 3] = [
        Metric::PrimaryCount,
        Metric::SecondaryCount,
        Metric::TotalCount,
    ];

    /// Wire name, as accepted by `?metric=`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Metric::PrimaryCount => "primary_count",
            Metric::SecondaryCount => "secondary_count",
            Metric::TotalCount => "total_count",
        }
    }

    /// Label shown next to the map selector.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::PrimaryCount => "World Cup Wins",
            Metric::SecondaryCount => "Runner-up Appearances",
            Metric::TotalCount => "Total Finals Appearances",
        }
    }

    pub fn value_of(&self, stats: &EntityStats) -> u32 {
        match self {
            Metric::PrimaryCount => stats.primary_count,
            Metric::SecondaryCount => stats.secondary_count,
            Metric::TotalCount => stats.total_count(),
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Metric {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Metric::ALL
            .into_iter()
            .find(|metric| metric.as_str() == s)
            .ok_or_else(|| {
                AppError::invalid_metric(
                    "Unknown metric",
                    json!({
                        "metric": s,
                        "allowed": Metric::ALL.map(|m| m.as_str()),
                    }),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_metrics() {
        assert_eq!("primary_count".parse::<Metric>().unwrap(), Metric::PrimaryCount);
        assert_eq!(
            "secondary_count".parse::<Metric>().unwrap(),
            Metric::SecondaryCount
        );
        assert_eq!("total_count".parse::<Metric>().unwrap(), Metric::TotalCount);
    }

    #[test]
    fn test_parse_unknown_metric() {
        let result = "bogus_metric".parse::<Metric>();
        assert!(matches!(result, Err(AppError::InvalidMetric { .. })));
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        assert!("Total_Count".parse::<Metric>().is_err());
    }

    #[test]
    fn test_value_of() {
        let mut stats = EntityStats::new("Italy", Some("ITA".to_string()));
        stats.primary_count = 4;
        stats.secondary_count = 2;

        assert_eq!(Metric::PrimaryCount.value_of(&stats), 4);
        assert_eq!(Metric::SecondaryCount.value_of(&stats), 2);
        assert_eq!(Metric::TotalCount.value_of(&stats), 6);
    }
}

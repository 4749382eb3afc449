//! DTOs for the metric catalog.

use serde::Serialize;

use crate::domain::entities::Metric;

#[derive(Debug, Serialize)]
pub struct MetricInfo {
    pub value: &'static str,
    pub label: &'static str,
    pub default: bool,
}

impl From<Metric> for MetricInfo {
    fn from(metric: Metric) -> Self {
        Self {
            value: metric.as_str(),
            label: metric.label(),
            default: metric == Metric::default(),
        }
    }
}

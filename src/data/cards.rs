//! Projection of a snapshot into render-ready card data.

use std::time::Instant;

use super::snapshot::{MetricSample, MetricSnapshot};

/// One display card: series name, instance, and the value text verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricCard {
    pub name: String,
    pub instance: String,
    pub value: String,
}

impl From<MetricSample> for MetricCard {
    fn from(sample: MetricSample) -> Self {
        let name = sample.name().to_string();
        let instance = sample.instance().to_string();
        Self {
            name,
            instance,
            value: sample.value.1,
        }
    }
}

/// The latest full snapshot projected for display.
///
/// Replaced wholesale on every successful poll; never merged or diffed.
#[derive(Debug, Clone)]
pub struct DashboardData {
    /// One card per sample, in snapshot (backend) order.
    pub cards: Vec<MetricCard>,
    /// When this snapshot was applied, for the status bar age display.
    pub last_updated: Instant,
}

impl DashboardData {
    /// Convert a raw snapshot into display data. Backend order is kept as-is.
    pub fn from_snapshot(snapshot: MetricSnapshot) -> Self {
        Self {
            cards: snapshot.into_iter().map(MetricCard::from).collect(),
            last_updated: Instant::now(),
        }
    }

    /// True when there are no cards to show (the placeholder state).
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::snapshot::{INSTANCE_LABEL, NAME_LABEL};
    use std::collections::BTreeMap;

    fn sample(name: &str, instance: &str, value: &str) -> MetricSample {
        let mut metric = BTreeMap::new();
        metric.insert(NAME_LABEL.to_string(), name.to_string());
        metric.insert(INSTANCE_LABEL.to_string(), instance.to_string());
        MetricSample {
            metric,
            value: (1700000000.0, value.to_string()),
        }
    }

    #[test]
    fn test_from_snapshot_maps_fields() {
        let data = DashboardData::from_snapshot(vec![sample(
            "bigip_cpu_usage",
            "host1",
            "42.5",
        )]);

        assert_eq!(data.cards.len(), 1);
        assert_eq!(
            data.cards[0],
            MetricCard {
                name: "bigip_cpu_usage".to_string(),
                instance: "host1".to_string(),
                value: "42.5".to_string(),
            }
        );
    }

    #[test]
    fn test_value_is_not_reformatted() {
        // Trailing zeros and exotic encodings pass through untouched
        let data = DashboardData::from_snapshot(vec![
            sample("m", "h", "42.500"),
            sample("m", "h", "1e3"),
            sample("m", "h", "NaN"),
        ]);

        let values: Vec<&str> = data.cards.iter().map(|c| c.value.as_str()).collect();
        assert_eq!(values, vec!["42.500", "1e3", "NaN"]);
    }

    #[test]
    fn test_order_is_preserved() {
        let data = DashboardData::from_snapshot(vec![
            sample("m", "zeta", "1"),
            sample("m", "alpha", "2"),
        ]);

        let instances: Vec<&str> = data.cards.iter().map(|c| c.instance.as_str()).collect();
        assert_eq!(instances, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_missing_labels_become_empty_strings() {
        let data = DashboardData::from_snapshot(vec![MetricSample {
            metric: BTreeMap::new(),
            value: (0.0, "7".to_string()),
        }]);

        assert_eq!(data.cards[0].name, "");
        assert_eq!(data.cards[0].instance, "");
        assert_eq!(data.cards[0].value, "7");
    }

    #[test]
    fn test_empty_snapshot_is_empty() {
        let data = DashboardData::from_snapshot(Vec::new());
        assert!(data.is_empty());
    }
}

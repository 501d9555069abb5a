use crate::loader::PointRecord;
use std::collections::BTreeMap;

/// Records split into noise and per-label cluster members.
///
/// Cluster keys iterate in ascending label order.
#[derive(Debug, Clone, Default)]
pub struct Partition {
    pub noise: Vec<PointRecord>,
    pub clusters: BTreeMap<i32, Vec<PointRecord>>,
}

impl Partition {
    pub fn cluster_count(&self) -> usize {
        self.clusters.len()
    }

    /// Labels in display order
    pub fn labels(&self) -> Vec<i32> {
        self.clusters.keys().copied().collect()
    }

    /// Total records across noise and all clusters
    pub fn len(&self) -> usize {
        self.noise.len() + self.clusters.values().map(Vec::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Derived statistics for one cluster
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterAggregate {
    pub label: i32,
    pub count: usize,
    pub centroid: (f64, f64),
    /// Square root of the summed per-axis sample variances
    pub spread: f64,
}

/// Figures shown in the statistics panel
#[derive(Debug, Clone)]
pub struct ClusteringSummary {
    pub total: usize,
    pub noise: usize,
    /// Aggregates in ascending label order
    pub clusters: Vec<ClusterAggregate>,
}

impl ClusteringSummary {
    pub fn cluster_count(&self) -> usize {
        self.clusters.len()
    }

    pub fn noise_percent(&self) -> f64 {
        self.percent_of_total(self.noise)
    }

    /// Share of all records, as a percentage. An empty dataset yields 0.
    pub fn percent_of_total(&self, count: usize) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            100.0 * count as f64 / self.total as f64
        }
    }
}

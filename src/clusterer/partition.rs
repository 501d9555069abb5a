use crate::clusterer::{
    centroid::compute_centroid,
    spread::compute_spread,
    types::{ClusterAggregate, ClusteringSummary, Partition},
};
use crate::loader::PointRecord;
use std::collections::BTreeMap;

/// Split records into noise (label -1) and clusters grouped by label.
///
/// Member order within a cluster follows input order.
pub fn partition(records: &[PointRecord]) -> Partition {
    let mut out = Partition::default();

    for record in records {
        if record.is_noise() {
            out.noise.push(*record);
        } else {
            out.clusters.entry(record.label).or_default().push(*record);
        }
    }

    tracing::debug!(
        noise = out.noise.len(),
        clusters = out.clusters.len(),
        "partitioned records"
    );

    out
}

/// Compute size, centroid and spread for every cluster.
pub fn aggregate(clusters: &BTreeMap<i32, Vec<PointRecord>>) -> BTreeMap<i32, ClusterAggregate> {
    clusters
        .iter()
        .filter(|(_, members)| !members.is_empty())
        .map(|(&label, members)| {
            let centroid = compute_centroid(members);
            let spread = compute_spread(members, centroid);
            (
                label,
                ClusterAggregate {
                    label,
                    count: members.len(),
                    centroid,
                    spread,
                },
            )
        })
        .collect()
}

pub fn summarize(
    records: &[PointRecord],
    partition: &Partition,
    aggregates: &BTreeMap<i32, ClusterAggregate>,
) -> ClusteringSummary {
    ClusteringSummary {
        total: records.len(),
        noise: partition.noise.len(),
        clusters: aggregates.values().cloned().collect(),
    }
}

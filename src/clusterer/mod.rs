mod centroid;
mod partition;
mod spread;
mod types;

#[cfg(test)]
mod tests;

pub use centroid::compute_centroid;
pub use partition::{aggregate, partition, summarize};
pub use spread::{compute_spread, sample_variance};
pub use types::{ClusterAggregate, ClusteringSummary, Partition};

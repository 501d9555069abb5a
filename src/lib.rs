// Public API exports
pub mod clusterer;
pub mod loader;
pub mod palette;
pub mod png;
pub mod render;

// Re-export main types for convenience
pub use loader::{
    DEFAULT_INPUT, LoadError, NOISE_LABEL, OUTPUT_SUFFIX, PointRecord, load, output_path_for,
    parse_records,
};

pub use clusterer::{ClusterAggregate, ClusteringSummary, Partition, aggregate, partition, summarize};

pub use palette::{ClusterColors, cluster_color};

pub use render::{
    DensityGrid, Figure, FigureConfig, RenderError, histogram2d, render, render_to_png,
    render_with, stats_text,
};

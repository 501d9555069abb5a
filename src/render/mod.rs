//! Composite figure rendering.
//!
//! Every panel receives its own drawing area carved out of one [`Figure`];
//! there is no shared plotting state between panels.

mod bars;
pub mod density;
mod error;
mod figure;
mod heatmap;
mod scatter;
pub mod stats;


pub use density::{DensityGrid, histogram2d};
pub use error::RenderError;
pub use figure::{Figure, FigureConfig, Panel};
pub use stats::stats_text;

use crate::clusterer::{ClusterAggregate, Partition, summarize};
use crate::loader::PointRecord;
use crate::palette::ClusterColors;
use plotters::style::{FontDesc, FontFamily, FontStyle};
use std::collections::BTreeMap;
use std::fs;
use std::ops::Range;
use std::path::Path;

/// Fraction of the data range added on each side of the scatter axes
const AXIS_PADDING: f64 = 0.05;

/// Shared view of the data every panel draws from
pub struct PlotData<'a> {
    pub records: &'a [PointRecord],
    pub partition: &'a Partition,
    pub aggregates: &'a BTreeMap<i32, ClusterAggregate>,
    pub colors: ClusterColors,
    pub bounds: Bounds,
}

/// Padded data extent for the scatter panels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Bounds {
    pub fn of(records: &[PointRecord]) -> Self {
        let (x_lo, x_hi) = density::axis_range(records.iter().map(|r| r.x));
        let (y_lo, y_hi) = density::axis_range(records.iter().map(|r| r.y));
        let pad_x = (x_hi - x_lo) * AXIS_PADDING;
        let pad_y = (y_hi - y_lo) * AXIS_PADDING;

        Self {
            x_min: x_lo - pad_x,
            x_max: x_hi + pad_x,
            y_min: y_lo - pad_y,
            y_max: y_hi + pad_y,
        }
    }

    pub fn ranges(&self) -> (Range<f64>, Range<f64>) {
        (self.x_min..self.x_max, self.y_min..self.y_max)
    }
}

/// Whole-number tick positions from 0 up to `top`, at most `max_ticks` of
/// them, stepping by 1, 2 or 5 times a power of ten.
pub(crate) fn count_ticks(top: f64, max_ticks: usize) -> Vec<f64> {
    let top = if top.is_finite() { top.max(0.0).floor() as u64 } else { 0 };
    let max_ticks = max_ticks.max(2) as u64;

    let mut magnitude = 1u64;
    let step = loop {
        if let Some(step) = [1, 2, 5]
            .into_iter()
            .map(|m| m * magnitude)
            .find(|&s| top / s < max_ticks)
        {
            break step;
        }
        magnitude *= 10;
    };

    (0..=top / step).map(|i| (i * step) as f64).collect()
}

pub(crate) fn title_font(size: f64) -> FontDesc<'static> {
    FontDesc::new(FontFamily::SansSerif, size, FontStyle::Bold)
}

pub(crate) fn axis_font(size: f64) -> FontDesc<'static> {
    FontDesc::new(FontFamily::SansSerif, size, FontStyle::Normal)
}

/// Draw all five panels into a fresh figure and return the PNG bytes.
pub fn render_to_png(
    records: &[PointRecord],
    partition: &Partition,
    aggregates: &BTreeMap<i32, ClusterAggregate>,
    config: &FigureConfig,
) -> Result<Vec<u8>, RenderError> {
    let data = PlotData {
        records,
        partition,
        aggregates,
        colors: ClusterColors::for_labels(partition.clusters.keys().copied()),
        bounds: Bounds::of(records),
    };
    let summary = summarize(records, partition, aggregates);
    let text = stats_text(&summary, config.max_listed_clusters);

    let mut figure = Figure::new(config);
    tracing::debug!(
        width = figure.dimensions().0,
        height = figure.dimensions().1,
        clusters = data.colors.len(),
        "rendering figure"
    );

    figure.draw(|root| {
        let body = root.titled(&config.title, title_font(34.0))?;

        // 2x3 grid; the scatter spans both rows of the left column
        let columns = body.split_evenly((1, 3));
        let middle = columns[1].split_evenly((2, 1));
        let right = columns[2].split_evenly((2, 1));

        scatter::draw_cluster_scatter(&columns[0], &data)?;
        bars::draw_cluster_sizes(&middle[0], &data)?;
        scatter::draw_centroids(&right[0], &data)?;
        heatmap::draw_density(&middle[1], &data, config.density_bins)?;
        stats::draw_stats_panel(&right[1], &text)?;
        Ok(())
    })?;

    figure.encode_png()
}

/// Render with the default layout and write the image to `output_path`.
pub fn render(
    records: &[PointRecord],
    partition: &Partition,
    aggregates: &BTreeMap<i32, ClusterAggregate>,
    output_path: impl AsRef<Path>,
) -> Result<(), RenderError> {
    render_with(records, partition, aggregates, output_path, &FigureConfig::default())
}

/// Render with an explicit layout. The file is written only after the whole
/// figure has been drawn and encoded.
pub fn render_with(
    records: &[PointRecord],
    partition: &Partition,
    aggregates: &BTreeMap<i32, ClusterAggregate>,
    output_path: impl AsRef<Path>,
    config: &FigureConfig,
) -> Result<(), RenderError> {
    let output_path = output_path.as_ref();
    let png = render_to_png(records, partition, aggregates, config)?;

    fs::write(output_path, &png).map_err(|source| RenderError::Io {
        path: output_path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %output_path.display(), bytes = png.len(), "wrote figure");
    Ok(())
}

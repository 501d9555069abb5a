use super::{Bounds, PlotData, Panel, RenderError, axis_font, title_font};
use crate::palette::NOISE_COLOR;
use plotters::prelude::*;

/// Share of each axis a legend box is assumed to cover from its corner
const LEGEND_REACH: f64 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum LegendCorner {
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
}

impl LegendCorner {
    /// Order of preference when corners tie
    const ALL: [LegendCorner; 4] = [
        LegendCorner::UpperRight,
        LegendCorner::UpperLeft,
        LegendCorner::LowerLeft,
        LegendCorner::LowerRight,
    ];

    fn contains(self, bounds: &Bounds, (x, y): (f64, f64)) -> bool {
        let x_reach = (bounds.x_max - bounds.x_min) * LEGEND_REACH;
        let y_reach = (bounds.y_max - bounds.y_min) * LEGEND_REACH;
        let right = x >= bounds.x_max - x_reach;
        let left = x <= bounds.x_min + x_reach;
        let upper = y >= bounds.y_max - y_reach;
        let lower = y <= bounds.y_min + y_reach;

        match self {
            LegendCorner::UpperRight => upper && right,
            LegendCorner::UpperLeft => upper && left,
            LegendCorner::LowerLeft => lower && left,
            LegendCorner::LowerRight => lower && right,
        }
    }

    fn position(self) -> SeriesLabelPosition {
        match self {
            LegendCorner::UpperRight => SeriesLabelPosition::UpperRight,
            LegendCorner::UpperLeft => SeriesLabelPosition::UpperLeft,
            LegendCorner::LowerLeft => SeriesLabelPosition::LowerLeft,
            LegendCorner::LowerRight => SeriesLabelPosition::LowerRight,
        }
    }
}

/// Corner whose legend box would hide the least weight of data.
pub(super) fn legend_corner(
    bounds: &Bounds,
    points: impl IntoIterator<Item = ((f64, f64), usize)>,
) -> LegendCorner {
    let mut covered = [0usize; 4];
    for (point, weight) in points {
        for (slot, corner) in covered.iter_mut().zip(LegendCorner::ALL) {
            if corner.contains(bounds, point) {
                *slot += weight;
            }
        }
    }

    LegendCorner::ALL
        .into_iter()
        .zip(covered)
        .min_by_key(|&(_, weight)| weight)
        .map(|(corner, _)| corner)
        .unwrap_or(LegendCorner::UpperRight)
}

/// Relative vertices of a five-pointed star centred on `center`.
pub(super) fn star_points(center: (i32, i32), radius: i32) -> Vec<(i32, i32)> {
    let inner = radius as f64 * 0.4;
    (0..10)
        .map(|i| {
            let r = if i % 2 == 0 { radius as f64 } else { inner };
            let angle = -std::f64::consts::FRAC_PI_2 + i as f64 * std::f64::consts::PI / 5.0;
            (
                center.0 + (r * angle.cos()).round() as i32,
                center.1 + (r * angle.sin()).round() as i32,
            )
        })
        .collect()
}

/// Main panel: every cluster in its colour, noise as gray crosses.
pub(super) fn draw_cluster_scatter(area: &Panel<'_>, data: &PlotData<'_>) -> Result<(), RenderError> {
    let (x_range, y_range) = data.bounds.ranges();

    let mut chart = ChartBuilder::on(area)
        .caption("DBSCAN Clustering Results", title_font(28.0))
        .margin(20)
        .x_label_area_size(55)
        .y_label_area_size(75)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .bold_line_style(BLACK.mix(0.15))
        .light_line_style(BLACK.mix(0.04))
        .x_desc("x")
        .y_desc("y")
        .axis_desc_style(axis_font(24.0))
        .label_style(axis_font(18.0))
        .draw()?;

    for (&label, members) in &data.partition.clusters {
        let color = data.colors.get(label);
        chart
            .draw_series(members.iter().map(|p| {
                EmptyElement::at((p.x, p.y))
                    + Circle::new((0, 0), 7, color.mix(0.7).filled())
                    + Circle::new((0, 0), 7, BLACK.mix(0.6).stroke_width(1))
            }))?
            .label(format!("Cluster {}", label))
            .legend(move |(x, y)| Circle::new((x + 10, y), 7, color.mix(0.7).filled()));
    }

    if !data.partition.noise.is_empty() {
        chart
            .draw_series(
                data.partition
                    .noise
                    .iter()
                    .map(|p| Cross::new((p.x, p.y), 5, NOISE_COLOR.mix(0.5).stroke_width(2))),
            )?
            .label("Noise")
            .legend(|(x, y)| Cross::new((x + 10, y), 5, NOISE_COLOR.stroke_width(2)));
    }

    if !data.partition.is_empty() {
        let corner = legend_corner(&data.bounds, data.records.iter().map(|p| ((p.x, p.y), 1)));
        chart
            .configure_series_labels()
            .position(corner.position())
            .background_style(WHITE.mix(0.9))
            .border_style(BLACK.mix(0.3))
            .label_font(axis_font(18.0))
            .draw()?;
    }

    Ok(())
}

/// Centroid panel: faint members with a star at each cluster mean.
pub(super) fn draw_centroids(area: &Panel<'_>, data: &PlotData<'_>) -> Result<(), RenderError> {
    let (x_range, y_range) = data.bounds.ranges();

    let mut chart = ChartBuilder::on(area)
        .caption("Cluster Centroids", title_font(24.0))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(65)
        .build_cartesian_2d(x_range, y_range)?;

    chart
        .configure_mesh()
        .bold_line_style(BLACK.mix(0.15))
        .light_line_style(BLACK.mix(0.04))
        .x_desc("x")
        .y_desc("y")
        .axis_desc_style(axis_font(20.0))
        .label_style(axis_font(16.0))
        .draw()?;

    for (&label, members) in &data.partition.clusters {
        let color = data.colors.get(label);
        chart.draw_series(
            members
                .iter()
                .map(|p| Circle::new((p.x, p.y), 4, color.mix(0.2).filled())),
        )?;
    }

    if !data.partition.noise.is_empty() {
        chart.draw_series(
            data.partition
                .noise
                .iter()
                .map(|p| Cross::new((p.x, p.y), 3, NOISE_COLOR.mix(0.3).stroke_width(1))),
        )?;
    }

    // stars last so they sit above every point
    for agg in data.aggregates.values() {
        let color = data.colors.get(agg.label);
        let mut outline = star_points((0, 0), 16);
        outline.push(outline[0]);

        chart
            .draw_series(std::iter::once(
                EmptyElement::at(agg.centroid)
                    + Polygon::new(star_points((0, 0), 16), color.filled())
                    + PathElement::new(outline, BLACK.stroke_width(2)),
            ))?
            .label(format!("C{}", agg.label))
            .legend(move |(x, y)| Polygon::new(star_points((x + 10, y), 9), color.filled()));
    }

    if !data.aggregates.is_empty() {
        // a hidden star costs more than every faint point together
        let star_weight = data.records.len() + 1;
        let corner = legend_corner(
            &data.bounds,
            data.records
                .iter()
                .map(|p| ((p.x, p.y), 1))
                .chain(data.aggregates.values().map(|agg| (agg.centroid, star_weight))),
        );
        chart
            .configure_series_labels()
            .position(corner.position())
            .background_style(WHITE.mix(0.9))
            .border_style(BLACK.mix(0.3))
            .label_font(axis_font(15.0))
            .draw()?;
    }

    Ok(())
}

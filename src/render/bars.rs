use super::{PlotData, Panel, RenderError, axis_font, count_ticks, title_font};
use plotters::prelude::*;
use plotters::style::TextStyle;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::ops::Range;

const MAX_Y_TICKS: usize = 8;

/// Half the gap left between neighbouring bars, in slot units
const BAR_INSET: f64 = 0.1;

/// X extent holding one unit-wide slot per cluster, centred on its index.
/// An empty chart still gets a single slot.
pub(super) fn bar_slots(n: usize) -> Range<f64> {
    -0.5..n.max(1) as f64 - 0.5
}

/// One x tick per cluster index.
pub(super) fn bar_ticks(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}

/// Bar per cluster (x = display index) with the count printed above it.
pub(super) fn draw_cluster_sizes(area: &Panel<'_>, data: &PlotData<'_>) -> Result<(), RenderError> {
    let sizes: Vec<(i32, usize)> = data
        .aggregates
        .values()
        .map(|agg| (agg.label, agg.count))
        .collect();
    let max_size = sizes.iter().map(|&(_, c)| c).max().unwrap_or(0);
    let y_max = if max_size == 0 { 1.0 } else { max_size as f64 * 1.12 };

    let mut chart = ChartBuilder::on(area)
        .caption("Cluster Size Distribution", title_font(24.0))
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(70)
        .build_cartesian_2d(
            bar_slots(sizes.len()).with_key_points(bar_ticks(sizes.len())),
            (0f64..y_max).with_key_points(count_ticks(y_max, MAX_Y_TICKS)),
        )?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .bold_line_style(BLACK.mix(0.15))
        .x_desc("Cluster ID")
        .y_desc("Number of Points")
        .x_label_formatter(&|v| format!("{:.0}", v))
        .y_label_formatter(&|v| format!("{:.0}", v))
        .axis_desc_style(axis_font(20.0))
        .label_style(axis_font(16.0))
        .draw()?;

    let value_style = TextStyle::from(axis_font(16.0)).pos(Pos::new(HPos::Center, VPos::Bottom));

    for (i, &(label, count)) in sizes.iter().enumerate() {
        let center = i as f64;
        chart.draw_series(std::iter::once(Rectangle::new(
            [
                (center - 0.5 + BAR_INSET, 0.0),
                (center + 0.5 - BAR_INSET, count as f64),
            ],
            data.colors.get(label).filled(),
        )))?;

        chart.draw_series(std::iter::once(Text::new(
            count.to_string(),
            (center, count as f64 + max_size as f64 * 0.01),
            value_style.clone(),
        )))?;
    }

    Ok(())
}

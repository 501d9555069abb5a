use super::density::histogram2d;
use super::{PlotData, Panel, RenderError, axis_font, count_ticks, title_font};
use crate::palette::heat_color;
use plotters::prelude::*;

const COLORBAR_WIDTH: u32 = 140;
const COLORBAR_STEPS: usize = 128;
const COLORBAR_TICKS: usize = 8;

/// Density of all points over the configured bin grid, with a colour bar.
pub(super) fn draw_density(
    area: &Panel<'_>,
    data: &PlotData<'_>,
    bins: usize,
) -> Result<(), RenderError> {
    let grid = histogram2d(data.records, bins);
    let max = grid.max_count();
    let (x0, x1, y0, y1) = grid.extent();

    let area = area.titled("Point Density Heatmap", title_font(24.0))?;
    let (w, _) = area.dim_in_pixel();
    let (plot_area, bar_area) = area.split_horizontally(w.saturating_sub(COLORBAR_WIDTH));

    let mut chart = ChartBuilder::on(&plot_area)
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(65)
        .build_cartesian_2d(x0..x1, y0..y1)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("x")
        .y_desc("y")
        .axis_desc_style(axis_font(20.0))
        .label_style(axis_font(16.0))
        .draw()?;

    let scale = if max == 0 { 1.0 } else { max as f64 };
    chart.draw_series((0..grid.bins).flat_map(|xi| {
        let grid = &grid;
        (0..grid.bins).map(move |yi| {
            let t = grid.count(xi, yi) as f64 / scale;
            Rectangle::new(
                [
                    (grid.x_edges[xi], grid.y_edges[yi]),
                    (grid.x_edges[xi + 1], grid.y_edges[yi + 1]),
                ],
                heat_color(t).filled(),
            )
        })
    }))?;

    let mut bar = ChartBuilder::on(&bar_area)
        .margin_top(15)
        .margin_bottom(60)
        .margin_right(15)
        .y_label_area_size(85)
        .build_cartesian_2d(
            0f64..1f64,
            (0f64..scale).with_key_points(count_ticks(scale, COLORBAR_TICKS)),
        )?;

    bar.configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .y_desc("Point Count")
        .y_label_formatter(&|v| format!("{:.0}", v))
        .axis_desc_style(axis_font(18.0))
        .label_style(axis_font(15.0))
        .draw()?;

    let step = scale / COLORBAR_STEPS as f64;
    bar.draw_series((0..COLORBAR_STEPS).map(|i| {
        let lo = i as f64 * step;
        Rectangle::new(
            [(0.0, lo), (1.0, lo + step)],
            heat_color((i as f64 + 0.5) / COLORBAR_STEPS as f64).filled(),
        )
    }))?;

    Ok(())
}

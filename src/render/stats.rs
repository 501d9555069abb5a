use super::{Panel, RenderError};
use crate::clusterer::ClusteringSummary;
use crate::palette::WHEAT;
use plotters::prelude::*;
use plotters::style::{FontDesc, FontFamily, FontStyle};

const RULE_WIDTH: usize = 30;

/// Format an integer with `,` thousands separators.
pub fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Text of the statistics panel. Only the first `max_listed` clusters get a
/// detail block; the rest are summarised in a trailing note.
pub fn stats_text(summary: &ClusteringSummary, max_listed: usize) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let mut lines = vec![
        "CLUSTERING STATISTICS".to_string(),
        rule.clone(),
        String::new(),
        format!("Total Points: {}", thousands(summary.total)),
        format!("Clusters Found: {}", summary.cluster_count()),
        format!(
            "Noise Points: {} ({:.1}%)",
            thousands(summary.noise),
            summary.noise_percent()
        ),
        String::new(),
        "CLUSTER DETAILS".to_string(),
        rule,
    ];

    for cluster in summary.clusters.iter().take(max_listed) {
        lines.push(String::new());
        lines.push(format!("Cluster {}:", cluster.label));
        lines.push(format!(
            "  Points: {} ({:.1}%)",
            thousands(cluster.count),
            summary.percent_of_total(cluster.count)
        ));
        lines.push(format!("  Spread: {:.2}", cluster.spread));
    }

    let hidden = summary.cluster_count().saturating_sub(max_listed);
    if hidden > 0 {
        lines.push(String::new());
        lines.push(format!("... and {} more clusters", hidden));
    }

    lines.join("\n")
}

/// Monospace text block on a wheat box, scaled down to fit the panel.
pub(super) fn draw_stats_panel(area: &Panel<'_>, text: &str) -> Result<(), RenderError> {
    let (w, h) = area.dim_in_pixel();
    let margin = (w.min(h) / 20) as i32;
    let (w, h) = (w as i32, h as i32);

    area.draw(&Rectangle::new(
        [(margin, margin), (w - margin, h - margin)],
        WHEAT.mix(0.3).filled(),
    ))?;
    area.draw(&Rectangle::new(
        [(margin, margin), (w - margin, h - margin)],
        BLACK.mix(0.4).stroke_width(1),
    ))?;

    let lines: Vec<&str> = text.lines().collect();
    let pad = margin + 16;
    let available = (h - 2 * pad).max(1);
    let line_height = (available / lines.len().max(1) as i32).clamp(6, 26);
    let font = FontDesc::new(
        FontFamily::Monospace,
        line_height as f64 * 0.85,
        FontStyle::Normal,
    )
    .color(&BLACK);

    for (i, line) in lines.iter().enumerate() {
        if line.is_empty() {
            continue;
        }
        let y = pad + i as i32 * line_height;
        area.draw(&Text::new(line.to_string(), (pad, y), font.clone()))?;
    }

    Ok(())
}

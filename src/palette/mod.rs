//! Colour assignment for clusters and the density ramp.
//!
//! Clusters take colours by ordinal (rank in ascending label order): the
//! first ten from the 10-colour categorical palette, the rest from the
//! 20-colour one, wrapping after that.
//!
//! Colours are taken from the palettes in order rather than sampled evenly
//! across them. Two clusters therefore get the first two tab10 colours, not
//! its first and last, so a cluster keeps its colour when clusters with
//! higher labels appear or disappear.


use plotters::style::RGBColor;
use std::collections::BTreeMap;

/// Categorical palette for the first ten clusters
pub const TAB10: [RGBColor; 10] = [
    RGBColor(31, 119, 180),
    RGBColor(255, 127, 14),
    RGBColor(44, 160, 44),
    RGBColor(214, 39, 40),
    RGBColor(148, 103, 189),
    RGBColor(140, 86, 75),
    RGBColor(227, 119, 194),
    RGBColor(127, 127, 127),
    RGBColor(188, 189, 34),
    RGBColor(23, 190, 207),
];

/// Extension palette for clusters past the tenth
pub const TAB20: [RGBColor; 20] = [
    RGBColor(31, 119, 180),
    RGBColor(174, 199, 232),
    RGBColor(255, 127, 14),
    RGBColor(255, 187, 120),
    RGBColor(44, 160, 44),
    RGBColor(152, 223, 138),
    RGBColor(214, 39, 40),
    RGBColor(255, 152, 150),
    RGBColor(148, 103, 189),
    RGBColor(197, 176, 213),
    RGBColor(140, 86, 75),
    RGBColor(196, 156, 148),
    RGBColor(227, 119, 194),
    RGBColor(247, 182, 210),
    RGBColor(127, 127, 127),
    RGBColor(199, 199, 199),
    RGBColor(188, 189, 34),
    RGBColor(219, 219, 141),
    RGBColor(23, 190, 207),
    RGBColor(158, 218, 229),
];

pub const NOISE_COLOR: RGBColor = RGBColor(211, 211, 211);

/// Background of the statistics panel
pub const WHEAT: RGBColor = RGBColor(245, 222, 179);

/// Yellow-orange-red stops, low to high
const YLORRD: [(u8, u8, u8); 9] = [
    (255, 255, 204),
    (255, 237, 160),
    (254, 217, 118),
    (254, 178, 76),
    (253, 141, 60),
    (252, 78, 42),
    (227, 26, 28),
    (189, 0, 38),
    (128, 0, 38),
];

/// Colour for the cluster at `ordinal` in ascending label order.
pub fn cluster_color(ordinal: usize) -> RGBColor {
    if ordinal < TAB10.len() {
        TAB10[ordinal]
    } else {
        TAB20[(ordinal - TAB10.len()) % TAB20.len()]
    }
}

/// Interpolate the heat ramp at `t` (clamped to `[0, 1]`).
pub fn heat_color(t: f64) -> RGBColor {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    let scaled = t * (YLORRD.len() - 1) as f64;
    let lo = scaled.floor() as usize;
    let hi = (lo + 1).min(YLORRD.len() - 1);
    let frac = scaled - lo as f64;

    let lerp = |a: u8, b: u8| (a as f64 + (b as f64 - a as f64) * frac).round() as u8;
    let (a, b) = (YLORRD[lo], YLORRD[hi]);
    RGBColor(lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
}

/// Label -> colour table fixed for one render.
#[derive(Debug, Clone, Default)]
pub struct ClusterColors {
    by_label: BTreeMap<i32, RGBColor>,
}

impl ClusterColors {
    /// Assign colours by ascending label order. Duplicate labels are ignored.
    pub fn for_labels(labels: impl IntoIterator<Item = i32>) -> Self {
        let mut sorted: Vec<i32> = labels.into_iter().collect();
        sorted.sort_unstable();
        sorted.dedup();

        let by_label = sorted
            .into_iter()
            .enumerate()
            .map(|(ordinal, label)| (label, cluster_color(ordinal)))
            .collect();

        Self { by_label }
    }

    pub fn get(&self, label: i32) -> RGBColor {
        self.by_label.get(&label).copied().unwrap_or(NOISE_COLOR)
    }

    pub fn len(&self) -> usize {
        self.by_label.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_label.is_empty()
    }
}

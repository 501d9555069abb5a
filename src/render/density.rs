use crate::loader::PointRecord;

/// 2D histogram of point positions.
#[derive(Debug, Clone)]
pub struct DensityGrid {
    pub bins: usize,
    pub x_edges: Vec<f64>,
    pub y_edges: Vec<f64>,
    /// Row-major by x bin: `counts[xi * bins + yi]`
    counts: Vec<u32>,
}

impl DensityGrid {
    pub fn count(&self, xi: usize, yi: usize) -> u32 {
        self.counts[xi * self.bins + yi]
    }

    pub fn max_count(&self) -> u32 {
        self.counts.iter().copied().max().unwrap_or(0)
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().map(|&c| c as u64).sum()
    }

    /// Data-space extent as `(x_min, x_max, y_min, y_max)`
    pub fn extent(&self) -> (f64, f64, f64, f64) {
        (
            self.x_edges[0],
            self.x_edges[self.bins],
            self.y_edges[0],
            self.y_edges[self.bins],
        )
    }
}

/// `[min, max]` of a coordinate. Zero width widens to ±0.5; no data gives `[0, 1]`.
pub fn axis_range(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
        (lo.min(v), hi.max(v))
    });

    if lo > hi {
        (0.0, 1.0)
    } else if lo == hi {
        (lo - 0.5, hi + 0.5)
    } else {
        (lo, hi)
    }
}

fn linspace(lo: f64, hi: f64, bins: usize) -> Vec<f64> {
    let step = (hi - lo) / bins as f64;
    let mut edges: Vec<f64> = (0..bins).map(|i| lo + step * i as f64).collect();
    edges.push(hi);
    edges
}

fn bin_index(v: f64, lo: f64, hi: f64, bins: usize) -> usize {
    let t = (v - lo) / (hi - lo);
    // the right edge belongs to the last bin
    ((t * bins as f64).floor().max(0.0) as usize).min(bins - 1)
}

/// Count points into a `bins x bins` grid spanning the data range.
pub fn histogram2d(records: &[PointRecord], bins: usize) -> DensityGrid {
    let bins = bins.max(1);
    let (x_lo, x_hi) = axis_range(records.iter().map(|r| r.x));
    let (y_lo, y_hi) = axis_range(records.iter().map(|r| r.y));

    let mut counts = vec![0u32; bins * bins];
    for r in records {
        let xi = bin_index(r.x, x_lo, x_hi, bins);
        let yi = bin_index(r.y, y_lo, y_hi, bins);
        counts[xi * bins + yi] += 1;
    }

    DensityGrid {
        bins,
        x_edges: linspace(x_lo, x_hi, bins),
        y_edges: linspace(y_lo, y_hi, bins),
        counts,
    }
}

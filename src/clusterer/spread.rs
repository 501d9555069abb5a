use crate::loader::PointRecord;

/// Sample variance (n - 1 denominator) around a known mean.
///
/// Fewer than two values have no dispersion and yield 0.
pub fn sample_variance(values: impl Iterator<Item = f64>, mean: f64) -> f64 {
    let mut n = 0usize;
    let mut sum_sq = 0.0;

    for v in values {
        let d = v - mean;
        sum_sq += d * d;
        n += 1;
    }

    if n < 2 {
        return 0.0;
    }

    sum_sq / (n - 1) as f64
}

/// `sqrt(var(x) + var(y))` over a cluster's members.
pub fn compute_spread(points: &[PointRecord], centroid: (f64, f64)) -> f64 {
    let var_x = sample_variance(points.iter().map(|p| p.x), centroid.0);
    let var_y = sample_variance(points.iter().map(|p| p.y), centroid.1);
    (var_x + var_y).sqrt()
}

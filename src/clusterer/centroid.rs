use crate::loader::PointRecord;

/// Arithmetic mean position of a set of points.
///
/// Callers guarantee `points` is non-empty.
pub fn compute_centroid(points: &[PointRecord]) -> (f64, f64) {
    let mut sx = 0.0;
    let mut sy = 0.0;

    for p in points {
        sx += p.x;
        sy += p.y;
    }

    let n = points.len() as f64;
    (sx / n, sy / n)
}

/// Label assigned to points that belong to no cluster
pub const NOISE_LABEL: i32 = -1;

/// A single labelled point from the results file
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointRecord {
    pub x: f64,
    pub y: f64,
    /// `-1` for noise, otherwise the cluster id
    pub label: i32,
}

impl PointRecord {
    pub fn new(x: f64, y: f64, label: i32) -> Self {
        Self { x, y, label }
    }

    pub fn is_noise(&self) -> bool {
        self.label == NOISE_LABEL
    }
}

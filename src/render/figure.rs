use super::RenderError;
use crate::png;
use plotters::coord::Shift;
use plotters::prelude::*;

/// A drawing area handed to one panel renderer
pub type Panel<'a> = DrawingArea<BitMapBackend<'a>, Shift>;

/// Fixed layout parameters for the composite figure
#[derive(Debug, Clone)]
pub struct FigureConfig {
    pub width_inches: f64,
    pub height_inches: f64,
    pub dpi: u32,
    /// Bins per axis in the density heatmap
    pub density_bins: usize,
    /// Clusters listed individually in the statistics panel
    pub max_listed_clusters: usize,
    pub title: String,
}

impl FigureConfig {
    pub fn new() -> Self {
        Self {
            width_inches: 16.0,
            height_inches: 10.0,
            dpi: 150,
            density_bins: 40,
            max_listed_clusters: 10,
            title: "DBSCAN Comprehensive Analysis".to_string(),
        }
    }

    pub fn size_inches(mut self, width: f64, height: f64) -> Self {
        self.width_inches = width;
        self.height_inches = height;
        self
    }

    pub fn dpi(mut self, dpi: u32) -> Self {
        self.dpi = dpi;
        self
    }

    pub fn density_bins(mut self, bins: usize) -> Self {
        self.density_bins = bins;
        self
    }

    pub fn max_listed_clusters(mut self, n: usize) -> Self {
        self.max_listed_clusters = n;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Canvas size in pixels, at least 1x1
    pub fn pixel_size(&self) -> (u32, u32) {
        let px = |inches: f64| ((inches * self.dpi as f64).round() as u32).max(1);
        (px(self.width_inches), px(self.height_inches))
    }
}

impl Default for FigureConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// In-memory RGB canvas. Nothing touches disk until the caller writes the
/// encoded bytes.
pub struct Figure {
    width: u32,
    height: u32,
    dpi: u32,
    pixels: Vec<u8>,
}

impl Figure {
    pub fn new(config: &FigureConfig) -> Self {
        let (width, height) = config.pixel_size();
        Self {
            width,
            height,
            dpi: config.dpi,
            pixels: vec![0; width as usize * height as usize * 3],
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Clear to white and run `f` against the root drawing area.
    pub fn draw<F>(&mut self, f: F) -> Result<(), RenderError>
    where
        F: FnOnce(&Panel<'_>) -> Result<(), RenderError>,
    {
        let root = BitMapBackend::with_buffer(&mut self.pixels, (self.width, self.height))
            .into_drawing_area();
        root.fill(&WHITE)?;
        f(&root)?;
        root.present()?;
        Ok(())
    }

    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        png::encode_rgb(&self.pixels, self.width, self.height, self.dpi).map_err(RenderError::Encode)
    }
}

use crate::config::StrokeStyle;
use crate::error::Result;

/// A point in surface pixels.
pub type Point = (f64, f64);

/// Pixel size of the drawing surface, kept equal to its container's size.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SurfaceDimensions {
    pub width: u32,
    pub height: u32,
}

impl SurfaceDimensions {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Raster sink the wave field paints onto.
///
/// The browser build wraps a 2D canvas context; tests record calls in memory.
pub trait Surface {
    /// Wipe the whole `dims` area.
    fn clear(&mut self, dims: SurfaceDimensions) -> Result<()>;

    /// Stroke `points` as one open path: move to the first, line to the rest.
    fn stroke_polyline(&mut self, points: &[Point], style: &StrokeStyle) -> Result<()>;
}

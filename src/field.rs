//! The wave background: vertical scan-lines displaced by a time-driven drift
//! and by a ripple around the pointer that scales with how far the pointer
//! moved on its last sample.

use crate::config::WaveConfig;
use crate::error::{Result, WaveError};
use crate::surface::{Point, Surface, SurfaceDimensions};

/// Latest pointer sample, relative to the surface origin.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub x: f64,
    pub y: f64,
    /// Distance moved since the previous sample, capped. Not divided by
    /// elapsed time: the ripple constants are tuned against this raw value.
    pub speed: f64,
    last_x: f64,
    last_y: f64,
}

impl PointerState {
    /// Record a new sample. The first sample measures from (0, 0).
    pub fn track(&mut self, x: f64, y: f64, speed_cap: f64) {
        let dx = x - self.last_x;
        let dy = y - self.last_y;
        self.x = x;
        self.y = y;
        self.speed = dx.hypot(dy).min(speed_cap);
        self.last_x = x;
        self.last_y = y;
    }
}

/// Number of scan-lines covering `width`.
pub fn line_count(width: u32, x_gap: f64) -> usize {
    ((f64::from(width) / x_gap).ceil() as usize).saturating_add(1)
}

/// Number of points on each scan-line covering `height`.
pub fn point_count(height: u32, y_gap: f64) -> usize {
    ((f64::from(height) / y_gap).ceil() as usize).saturating_add(1)
}

/// Vertical displacement caused by the pointer at distance `dist`.
///
/// Zero at and beyond the radius; inside it a `sin` ripple scaled by a
/// linear falloff and by the pointer speed.
pub fn pointer_effect(dist: f64, speed: f64, config: &WaveConfig) -> f64 {
    if dist >= config.pointer_radius {
        return 0.0;
    }
    let strength = (1.0 - dist / config.pointer_radius) * speed * config.pointer_strength;
    (dist * config.ripple_frequency).sin() * strength
}

pub struct WaveFieldRenderer {
    config: WaveConfig,
    dims: SurfaceDimensions,
    pointer: PointerState,
    // Reused across lines and frames.
    path: Vec<Point>,
}

impl WaveFieldRenderer {
    pub fn new(config: WaveConfig) -> Self {
        Self {
            config,
            dims: SurfaceDimensions::default(),
            pointer: PointerState::default(),
            path: Vec::new(),
        }
    }

    pub fn config(&self) -> &WaveConfig {
        &self.config
    }

    pub fn dimensions(&self) -> SurfaceDimensions {
        self.dims
    }

    pub fn pointer(&self) -> PointerState {
        self.pointer
    }

    pub fn resize(&mut self, width: u32, height: u32) {
        self.dims = SurfaceDimensions::new(width, height);
    }

    /// Pointer moved to surface-relative (`x`, `y`).
    pub fn pointer_move(&mut self, x: f64, y: f64) {
        self.pointer.track(x, y, self.config.speed_cap);
    }

    pub fn line_count(&self) -> usize {
        line_count(self.dims.width, self.config.x_gap)
    }

    pub fn point_count(&self) -> usize {
        point_count(self.dims.height, self.config.y_gap)
    }

    /// Plotted position of grid point (`line`, `point`) at `time` ms.
    pub fn displaced_point(&self, line: usize, point: usize, time: f64) -> Point {
        let c = &self.config;
        let x = line as f64 * c.x_gap;
        let y = point as f64 * c.y_gap;

        let offset_x = ((x + time * c.drift_x_time_scale) * c.drift_x_spatial_scale).sin()
            * c.drift_x_amplitude;
        let offset_y = ((y + time * c.drift_y_time_scale) * c.drift_y_spatial_scale).cos()
            * c.drift_y_amplitude;

        let dist = (x - self.pointer.x).hypot(y - self.pointer.y);
        let ripple = pointer_effect(dist, self.pointer.speed, c);

        (x + offset_x, y + offset_y + ripple)
    }

    /// All plotted points of scan-line `line` at `time` ms.
    pub fn line_points(&self, line: usize, time: f64) -> Vec<Point> {
        (0..self.point_count())
            .map(|point| self.displaced_point(line, point, time))
            .collect()
    }

    /// Clear `surface` and paint one frame for `time` ms.
    pub fn draw<S: Surface>(&mut self, surface: &mut S, time: f64) -> Result<()> {
        if !time.is_finite() {
            return Err(WaveError::NonFiniteTime(time));
        }
        surface.clear(self.dims)?;

        let lines = self.line_count();
        let points = self.point_count();
        let mut path = std::mem::take(&mut self.path);
        let mut result = Ok(());
        for line in 0..lines {
            path.clear();
            path.extend((0..points).map(|point| self.displaced_point(line, point, time)));
            result = surface.stroke_polyline(&path, &self.config.stroke);
            if result.is_err() {
                break;
            }
        }
        self.path = path;
        result
    }
}

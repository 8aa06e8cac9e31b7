//! Tuning constants for the wave background.
//!
//! Every field has a default matching the page's stock look, so a JSON
//! override only needs to name the values it changes:
//!
//! ```json
//! { "xGap": 12, "stroke": { "color": "rgba(0, 0, 40, 0.2)" } }
//! ```

use serde::Deserialize;

use crate::error::{Result, WaveError};

/// Smallest accepted grid spacing, in pixels. Finer grids cost a polyline
/// per pixel column and stall the frame.
pub const MIN_GAP: f64 = 1.0;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StrokeStyle {
    /// Any CSS color string accepted by `strokeStyle`.
    pub color: String,
    pub width: f64,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: "rgba(22, 0, 0, 0.15)".to_string(),
            width: 1.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WaveConfig {
    /// Horizontal spacing between scan-lines, in pixels.
    pub x_gap: f64,
    /// Vertical spacing between points on a scan-line, in pixels.
    pub y_gap: f64,

    pub drift_x_time_scale: f64,
    pub drift_x_spatial_scale: f64,
    pub drift_x_amplitude: f64,

    pub drift_y_time_scale: f64,
    pub drift_y_spatial_scale: f64,
    pub drift_y_amplitude: f64,

    /// Points at or beyond this distance from the pointer are untouched.
    pub pointer_radius: f64,
    pub pointer_strength: f64,
    pub ripple_frequency: f64,
    /// Upper bound on the per-sample pointer displacement.
    pub speed_cap: f64,

    pub stroke: StrokeStyle,
}

impl Default for WaveConfig {
    fn default() -> Self {
        Self {
            x_gap: 10.0,
            y_gap: 32.0,
            drift_x_time_scale: 0.0125,
            drift_x_spatial_scale: 0.02,
            drift_x_amplitude: 32.0,
            drift_y_time_scale: 0.005,
            drift_y_spatial_scale: 0.01,
            drift_y_amplitude: 16.0,
            pointer_radius: 150.0,
            pointer_strength: 0.5,
            ripple_frequency: 0.05,
            speed_cap: 100.0,
            stroke: StrokeStyle::default(),
        }
    }
}

impl WaveConfig {
    /// Parse a (possibly partial) JSON override and validate the result.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: WaveConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let scalars = [
            ("xGap", self.x_gap),
            ("yGap", self.y_gap),
            ("driftXTimeScale", self.drift_x_time_scale),
            ("driftXSpatialScale", self.drift_x_spatial_scale),
            ("driftXAmplitude", self.drift_x_amplitude),
            ("driftYTimeScale", self.drift_y_time_scale),
            ("driftYSpatialScale", self.drift_y_spatial_scale),
            ("driftYAmplitude", self.drift_y_amplitude),
            ("pointerRadius", self.pointer_radius),
            ("pointerStrength", self.pointer_strength),
            ("rippleFrequency", self.ripple_frequency),
            ("speedCap", self.speed_cap),
            ("stroke.width", self.stroke.width),
        ];
        if let Some((name, value)) = scalars.iter().find(|(_, v)| !v.is_finite()) {
            return Err(WaveError::InvalidConfig(format!("{name} must be finite, got {value}")));
        }

        let gaps = [("xGap", self.x_gap), ("yGap", self.y_gap)];
        if let Some((name, value)) = gaps.iter().find(|(_, v)| *v < MIN_GAP) {
            return Err(WaveError::InvalidConfig(format!(
                "{name} must be at least {MIN_GAP}, got {value}"
            )));
        }

        let positive = [
            ("pointerRadius", self.pointer_radius),
            ("stroke.width", self.stroke.width),
        ];
        if let Some((name, value)) = positive.iter().find(|(_, v)| *v <= 0.0) {
            return Err(WaveError::InvalidConfig(format!("{name} must be positive, got {value}")));
        }

        if self.speed_cap < 0.0 {
            return Err(WaveError::InvalidConfig(format!(
                "speedCap must not be negative, got {}",
                self.speed_cap
            )));
        }
        if self.pointer_strength < 0.0 {
            return Err(WaveError::InvalidConfig(format!(
                "pointerStrength must not be negative, got {}",
                self.pointer_strength
            )));
        }
        if self.stroke.color.trim().is_empty() {
            return Err(WaveError::InvalidConfig("stroke.color must not be empty".into()));
        }
        Ok(())
    }
}

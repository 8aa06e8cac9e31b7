#![allow(dead_code)]

use waves_wasm::{FrameScheduler, Point, Result, StrokeStyle, Surface, SurfaceDimensions, WaveError};

/// Surface that records every call instead of painting.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    pub clears: Vec<SurfaceDimensions>,
    pub paths: Vec<Vec<Point>>,
    pub styles: Vec<StrokeStyle>,
    /// Fail the `n`th stroke (0-based) of every frame.
    pub fail_stroke_at: Option<usize>,
    strokes_this_frame: usize,
}

impl RecordingSurface {
    pub fn failing_at(stroke: usize) -> Self {
        Self {
            fail_stroke_at: Some(stroke),
            ..Self::default()
        }
    }
}

impl Surface for RecordingSurface {
    fn clear(&mut self, dims: SurfaceDimensions) -> Result<()> {
        self.clears.push(dims);
        self.paths.clear();
        self.styles.clear();
        self.strokes_this_frame = 0;
        Ok(())
    }

    fn stroke_polyline(&mut self, points: &[Point], style: &StrokeStyle) -> Result<()> {
        let index = self.strokes_this_frame;
        self.strokes_this_frame += 1;
        if self.fail_stroke_at == Some(index) {
            return Err(WaveError::Surface(format!("stroke {index} rejected")));
        }
        self.paths.push(points.to_vec());
        self.styles.push(style.clone());
        Ok(())
    }
}

/// Scheduler whose frames are fired by hand.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_token: u32,
    pub pending: Vec<u32>,
    pub cancelled: Vec<u32>,
    pub refuse: bool,
}

impl FrameScheduler for ManualScheduler {
    type Token = u32;

    fn request_frame(&mut self) -> Result<u32> {
        if self.refuse {
            return Err(WaveError::Scheduler("refused".into()));
        }
        self.next_token += 1;
        self.pending.push(self.next_token);
        Ok(self.next_token)
    }

    fn cancel_frame(&mut self, token: u32) {
        self.pending.retain(|t| *t != token);
        self.cancelled.push(token);
    }
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// Fire the most recently requested frame, as the browser would.
pub fn fire<S: Surface>(animation: &mut waves_wasm::Animation<S, ManualScheduler>, time: f64) -> bool {
    match animation.scheduler_mut().pending.pop() {
        Some(_) => {
            animation.on_frame(time);
            true
        }
        None => false,
    }
}

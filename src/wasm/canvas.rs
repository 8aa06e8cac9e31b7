use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, JsCast};
use web_sys::{window, CanvasRenderingContext2d, HtmlCanvasElement};

use crate::{FrameScheduler, Point, Result, StrokeStyle, Surface, SurfaceDimensions, WaveError};

/// Frame callback slot shared between the scheduler and the closure it runs.
pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

pub struct Canvas2dSurface {
    ctx: CanvasRenderingContext2d,
}

impl Canvas2dSurface {
    pub fn new(canvas: &HtmlCanvasElement) -> std::result::Result<Self, wasm_bindgen::JsValue> {
        let ctx: CanvasRenderingContext2d = canvas
            .get_context("2d")?
            .ok_or("2D canvas not supported")?
            .dyn_into()?;
        Ok(Self { ctx })
    }
}

impl Surface for Canvas2dSurface {
    fn clear(&mut self, dims: SurfaceDimensions) -> Result<()> {
        self.ctx
            .clear_rect(0.0, 0.0, f64::from(dims.width), f64::from(dims.height));
        Ok(())
    }

    fn stroke_polyline(&mut self, points: &[Point], style: &StrokeStyle) -> Result<()> {
        let Some(((x0, y0), rest)) = points.split_first() else {
            return Ok(());
        };
        self.ctx.set_stroke_style_str(&style.color);
        self.ctx.set_line_width(style.width);
        self.ctx.begin_path();
        self.ctx.move_to(*x0, *y0);
        for (x, y) in rest {
            self.ctx.line_to(*x, *y);
        }
        self.ctx.stroke();
        Ok(())
    }
}

/// Match the canvas backing store to its laid-out size.
pub fn fit_to_layout(canvas: &HtmlCanvasElement) -> SurfaceDimensions {
    let width = canvas.offset_width().max(0) as u32;
    let height = canvas.offset_height().max(0) as u32;
    canvas.set_width(width);
    canvas.set_height(height);
    SurfaceDimensions::new(width, height)
}

/// `requestAnimationFrame` driving whatever closure sits in the shared slot.
pub struct RafScheduler {
    callback: FrameCallback,
}

impl RafScheduler {
    pub fn new(callback: FrameCallback) -> Self {
        Self { callback }
    }
}

impl FrameScheduler for RafScheduler {
    type Token = i32;

    fn request_frame(&mut self) -> Result<i32> {
        let window = window().ok_or_else(|| WaveError::Scheduler("no window".into()))?;
        let slot = self.callback.borrow();
        let callback = slot
            .as_ref()
            .ok_or_else(|| WaveError::Scheduler("frame callback released".into()))?;
        window
            .request_animation_frame(callback.as_ref().unchecked_ref())
            .map_err(|e| WaveError::Scheduler(format!("{e:?}")))
    }

    fn cancel_frame(&mut self, token: i32) {
        if let Some(window) = window() {
            window.cancel_animation_frame(token).ok();
        }
    }
}

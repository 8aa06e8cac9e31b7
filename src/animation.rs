//! Frame loop driving a [`WaveFieldRenderer`].
//!
//! Rather than a callback that re-registers itself forever, the loop is an
//! explicit object: [`Animation::start`] requests the first frame, every
//! [`Animation::on_frame`] requests the next one, and [`Animation::cancel`]
//! withdraws whatever is pending. A frame that fails is logged and counted
//! but never ends the loop.

use crate::error::Result;
use crate::field::WaveFieldRenderer;
use crate::surface::Surface;

/// Per-refresh callback registration, e.g. `requestAnimationFrame`.
pub trait FrameScheduler {
    /// Identifies a pending request so it can be withdrawn.
    type Token;

    fn request_frame(&mut self) -> Result<Self::Token>;
    fn cancel_frame(&mut self, token: Self::Token);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameStats {
    /// Frames attempted, including faulted ones.
    pub frames: u64,
    pub faults: u64,
}

pub struct Animation<S: Surface, F: FrameScheduler> {
    renderer: WaveFieldRenderer,
    surface: S,
    scheduler: F,
    pending: Option<F::Token>,
    active: bool,
    stats: FrameStats,
}

impl<S: Surface, F: FrameScheduler> Animation<S, F> {
    pub fn new(renderer: WaveFieldRenderer, surface: S, scheduler: F) -> Self {
        Self {
            renderer,
            surface,
            scheduler,
            pending: None,
            active: false,
            stats: FrameStats::default(),
        }
    }

    pub fn renderer(&self) -> &WaveFieldRenderer {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut WaveFieldRenderer {
        &mut self.renderer
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn scheduler(&self) -> &F {
        &self.scheduler
    }

    pub fn scheduler_mut(&mut self) -> &mut F {
        &mut self.scheduler
    }

    pub fn stats(&self) -> FrameStats {
        self.stats
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Request the first frame. Calling it on a running loop is a no-op.
    pub fn start(&mut self) -> Result<()> {
        if self.active {
            return Ok(());
        }
        self.pending = Some(self.scheduler.request_frame()?);
        self.active = true;
        Ok(())
    }

    /// Scheduler callback: draw one frame for `time` ms, then request the next.
    pub fn on_frame(&mut self, time: f64) {
        // The token for this callback has been consumed by the scheduler.
        self.pending = None;
        if !self.active {
            return;
        }

        self.stats.frames += 1;
        if let Err(err) = self.renderer.draw(&mut self.surface, time) {
            self.stats.faults += 1;
            log::warn!("wave frame {} failed: {err}", self.stats.frames);
        }

        match self.scheduler.request_frame() {
            Ok(token) => self.pending = Some(token),
            Err(err) => {
                log::error!("cannot schedule next wave frame: {err}");
                self.active = false;
            }
        }
    }

    /// Stop the loop and withdraw any pending frame. Safe to call repeatedly.
    pub fn cancel(&mut self) {
        self.active = false;
        if let Some(token) = self.pending.take() {
            self.scheduler.cancel_frame(token);
        }
    }
}

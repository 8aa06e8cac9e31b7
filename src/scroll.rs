//! Scroll-linked hero parallax and scroll-indicator fade.

const PARALLAX_RATE: f64 = -0.5;
const HERO_FACTOR: f64 = 0.3;
/// The indicator is fully faded after this many pixels.
const INDICATOR_FADE_PX: f64 = 100.0;

/// Vertical translation for the hero content, or `None` once the hero has
/// scrolled out of the viewport and should be left alone.
pub fn hero_offset(scrolled: f64, viewport_height: f64) -> Option<f64> {
    (scrolled < viewport_height).then(|| scrolled * PARALLAX_RATE * HERO_FACTOR)
}

/// Opacity for the scroll indicator, or `None` past the fade distance.
pub fn indicator_opacity(scrolled: f64) -> Option<f64> {
    (scrolled < INDICATOR_FADE_PX).then(|| 1.0 - scrolled / INDICATOR_FADE_PX)
}

/// Coalesces scroll events into at most one update per animation frame.
#[derive(Debug, Default)]
pub struct ScrollThrottle {
    ticking: bool,
}

impl ScrollThrottle {
    /// Returns true when the caller should request a frame for this event.
    pub fn on_scroll(&mut self) -> bool {
        if self.ticking {
            return false;
        }
        self.ticking = true;
        true
    }

    /// Run `schedule` for this event unless an update is already pending.
    /// Returns whether a frame was requested. A failed request clears the
    /// pending flag so later scrolls can try again.
    pub fn request<E>(&mut self, schedule: impl FnOnce() -> Result<(), E>) -> Result<bool, E> {
        if !self.on_scroll() {
            return Ok(false);
        }
        if let Err(err) = schedule() {
            self.on_frame();
            return Err(err);
        }
        Ok(true)
    }

    /// Called from the requested frame once the update has been applied.
    pub fn on_frame(&mut self) {
        self.ticking = false;
    }
}

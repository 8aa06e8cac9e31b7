//! Count-up animation for the statistics section.

use crate::error::{Result, WaveError};

pub const DEFAULT_DURATION_MS: f64 = 2000.0;
/// Roughly one 60 Hz frame.
pub const DEFAULT_TICK_MS: f64 = 16.0;

/// Targets equal to this are shown bare; everything else gets a `+`.
const EXACT_TARGET: u32 = 100;

#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: u32,
    increment: f64,
    current: f64,
    finished: bool,
}

impl CounterAnimation {
    pub fn new(target: u32, duration_ms: f64, tick_ms: f64) -> Self {
        let ticks = if tick_ms > 0.0 { duration_ms / tick_ms } else { 0.0 };
        // Zero ticks means "jump straight to the target".
        let increment = if ticks > 0.0 {
            f64::from(target) / ticks
        } else {
            f64::INFINITY
        };
        Self {
            target,
            increment,
            current: 0.0,
            finished: false,
        }
    }

    /// Parse a `data-target` attribute value.
    ///
    /// Only a whole non-negative number (surrounding whitespace allowed) is
    /// accepted. Unlike JavaScript's `parseInt`, trailing text such as the
    /// `px` in `"12px"` is an error rather than silently dropped.
    pub fn from_attribute(raw: &str) -> Result<Self> {
        let target = raw
            .trim()
            .parse::<u32>()
            .map_err(|_| WaveError::InvalidCounterTarget(raw.to_string()))?;
        Ok(Self::new(target, DEFAULT_DURATION_MS, DEFAULT_TICK_MS))
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Label shown before the first tick.
    pub fn initial_label() -> &'static str {
        "0"
    }

    /// Advance one tick and return the label to display.
    pub fn tick(&mut self) -> String {
        if !self.finished {
            self.current += self.increment;
            if self.current >= f64::from(self.target) {
                self.finished = true;
            }
        }
        if self.finished {
            self.label(self.target)
        } else {
            self.label(self.current.ceil() as u32)
        }
    }

    fn label(&self, value: u32) -> String {
        if self.target == EXACT_TARGET {
            value.to_string()
        } else {
            format!("{value}+")
        }
    }
}

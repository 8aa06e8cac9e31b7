//! Animated wave background for the portfolio page, plus the small
//! scroll and counter effects that sit on top of it.
//!
//! The renderer, frame loop and effect models are plain Rust and build on
//! any target; the browser glue lives in the wasm32-only `wasm` module.

pub mod animation;
pub mod config;
pub mod counter;
pub mod error;
pub mod field;
pub mod scroll;
pub mod surface;

pub use animation::{Animation, FrameScheduler, FrameStats};
pub use config::{StrokeStyle, WaveConfig};
pub use counter::CounterAnimation;
pub use error::{Result, WaveError};
pub use field::{PointerState, WaveFieldRenderer};
pub use surface::{Point, Surface, SurfaceDimensions};

/// Element id the page gives its background canvas.
pub const DEFAULT_CANVAS_ID: &str = "waves-bg";

// Only compile wasm-specific code when targeting wasm32.

#[cfg(target_arch = "wasm32")]
mod wasm {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;

    use crate::{WaveConfig, WaveError, DEFAULT_CANVAS_ID};

    mod canvas;
    mod effects;
    mod render;

    pub use render::WavesHandle;

    thread_local! {
        static MOUNTED: RefCell<Option<WavesHandle>> = const { RefCell::new(None) };
    }

    impl From<WaveError> for JsValue {
        fn from(err: WaveError) -> Self {
            js_sys::Error::new(&err.to_string()).into()
        }
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).ok();

        mount_page_background();
        Ok(())
    }

    /// Mount on `#waves-bg` with defaults. Failures are logged, never
    /// raised, so the module's other exports stay usable without the
    /// background. Returns whether a background is now running.
    pub fn mount_page_background() -> bool {
        let handle = match render::mount_by_id(DEFAULT_CANVAS_ID, WaveConfig::default()) {
            Ok(Some(handle)) => handle,
            Ok(None) => return false,
            Err(err) => {
                log::error!("wave background disabled: {err:?}");
                return false;
            }
        };
        MOUNTED.with(|mounted| {
            if let Some(mut previous) = mounted.borrow_mut().replace(handle) {
                previous.cancel();
            }
        });
        true
    }

    /// Mount the wave background on `canvas_id`, optionally overriding the
    /// defaults with a JSON config. Returns `undefined` if no such canvas.
    #[wasm_bindgen(js_name = mountWaves)]
    pub fn mount_waves(
        canvas_id: &str,
        config_json: Option<String>,
    ) -> Result<Option<WavesHandle>, JsValue> {
        let config = match config_json.as_deref() {
            Some(json) => WaveConfig::from_json(json)?,
            None => WaveConfig::default(),
        };
        render::mount_by_id(canvas_id, config)
    }

    /// Tear down the background mounted at startup, if any.
    #[wasm_bindgen(js_name = unmountWaves)]
    pub fn unmount_waves() {
        let handle = MOUNTED.with(|mounted| mounted.borrow_mut().take());
        if let Some(mut handle) = handle {
            handle.cancel();
        }
    }
}

#[cfg(target_arch = "wasm32")]
pub use wasm::{mount_page_background, mount_waves, unmount_waves, WavesHandle};

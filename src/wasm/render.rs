use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::{closure::Closure, prelude::*, JsCast};
use web_sys::{window, Event, EventTarget, HtmlCanvasElement, MouseEvent};

use super::canvas::{fit_to_layout, Canvas2dSurface, FrameCallback, RafScheduler};
use crate::{Animation, PointerState, SurfaceDimensions, WaveConfig, WaveFieldRenderer};

type SharedAnimation = Rc<RefCell<Animation<Canvas2dSurface, RafScheduler>>>;

/// Event listener that detaches itself when dropped.
struct Listener {
    target: EventTarget,
    event: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    fn attach(
        target: EventTarget,
        event: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target,
            event,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        self.target
            .remove_event_listener_with_callback(self.event, self.closure.as_ref().unchecked_ref())
            .ok();
    }
}

struct Mounted {
    animation: SharedAnimation,
    callback: FrameCallback,
    _listeners: Vec<Listener>,
}

/// Owned subscription for a running wave background.
///
/// `cancel()` (or freeing the handle from JS) stops the frame loop,
/// detaches the resize and pointer listeners and releases the canvas.
#[wasm_bindgen]
pub struct WavesHandle {
    inner: Option<Mounted>,
}

#[wasm_bindgen]
impl WavesHandle {
    pub fn cancel(&mut self) {
        if let Some(mounted) = self.inner.take() {
            mounted.animation.borrow_mut().cancel();
            // Break the closure -> animation -> scheduler -> closure cycle.
            mounted.callback.borrow_mut().take();
            log::info!("wave background unmounted");
        }
    }

    #[wasm_bindgen(getter)]
    pub fn active(&self) -> bool {
        self.inner
            .as_ref()
            .is_some_and(|m| m.animation.borrow().is_active())
    }

    #[wasm_bindgen(getter)]
    pub fn frames(&self) -> f64 {
        self.inner
            .as_ref()
            .map_or(0.0, |m| m.animation.borrow().stats().frames as f64)
    }

    #[wasm_bindgen(getter)]
    pub fn faults(&self) -> f64 {
        self.inner
            .as_ref()
            .map_or(0.0, |m| m.animation.borrow().stats().faults as f64)
    }
}

impl WavesHandle {
    /// Surface size the renderer last saw, or `None` once cancelled.
    pub fn dimensions(&self) -> Option<SurfaceDimensions> {
        self.inner
            .as_ref()
            .map(|m| m.animation.borrow().renderer().dimensions())
    }

    /// Latest surface-relative pointer sample, or `None` once cancelled.
    pub fn pointer(&self) -> Option<PointerState> {
        self.inner
            .as_ref()
            .map(|m| m.animation.borrow().renderer().pointer())
    }
}

impl Drop for WavesHandle {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Mount on the canvas with id `canvas_id`. A missing canvas is not an
/// error: the page simply has no wave background.
pub fn mount_by_id(canvas_id: &str, config: WaveConfig) -> Result<Option<WavesHandle>, JsValue> {
    let document = window()
        .ok_or("no window")?
        .document()
        .ok_or("no document")?;
    let Some(element) = document.get_element_by_id(canvas_id) else {
        log::debug!("no #{canvas_id} canvas, wave background disabled");
        return Ok(None);
    };
    let canvas = element.dyn_into::<HtmlCanvasElement>()?;
    mount(canvas, config).map(Some)
}

/// Start the render loop on `canvas`.
pub fn mount(canvas: HtmlCanvasElement, config: WaveConfig) -> Result<WavesHandle, JsValue> {
    config.validate()?;
    let window = window().ok_or("no window")?;
    let surface = Canvas2dSurface::new(&canvas)?;

    let mut renderer = WaveFieldRenderer::new(config);
    let dims = fit_to_layout(&canvas);
    renderer.resize(dims.width, dims.height);

    let callback: FrameCallback = Rc::new(RefCell::new(None));
    let animation: SharedAnimation = Rc::new(RefCell::new(Animation::new(
        renderer,
        surface,
        RafScheduler::new(callback.clone()),
    )));

    // Closures only hold weak references so dropping the handle frees everything.
    let weak = Rc::downgrade(&animation);
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move |time: f64| {
        with_animation(&weak, |animation| animation.on_frame(time));
    }) as Box<dyn FnMut(f64)>));

    let resize = {
        let weak = Rc::downgrade(&animation);
        let canvas = canvas.clone();
        Listener::attach(window.clone().into(), "resize", move |_| {
            let dims = fit_to_layout(&canvas);
            with_animation(&weak, |animation| {
                animation.renderer_mut().resize(dims.width, dims.height)
            });
        })?
    };

    let pointer = {
        let weak = Rc::downgrade(&animation);
        let canvas = canvas.clone();
        Listener::attach(window.into(), "mousemove", move |event| {
            let Some(event) = event.dyn_ref::<MouseEvent>() else {
                return;
            };
            let rect = canvas.get_bounding_client_rect();
            let x = f64::from(event.client_x()) - rect.left();
            let y = f64::from(event.client_y()) - rect.top();
            with_animation(&weak, |animation| animation.renderer_mut().pointer_move(x, y));
        })?
    };

    animation.borrow_mut().start()?;
    log::info!("wave background mounted at {}x{}", dims.width, dims.height);

    Ok(WavesHandle {
        inner: Some(Mounted {
            animation,
            callback,
            _listeners: vec![resize, pointer],
        }),
    })
}

fn with_animation(
    weak: &Weak<RefCell<Animation<Canvas2dSurface, RafScheduler>>>,
    f: impl FnOnce(&mut Animation<Canvas2dSurface, RafScheduler>),
) {
    let Some(animation) = weak.upgrade() else {
        return;
    };
    match animation.try_borrow_mut() {
        Ok(mut animation) => f(&mut animation),
        Err(_) => log::error!("wave animation re-entered from its own callback"),
    };
}

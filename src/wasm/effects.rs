use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::{closure::Closure, prelude::*, JsCast};
use web_sys::{window, AddEventListenerOptions, HtmlElement};

use crate::counter::{CounterAnimation, DEFAULT_TICK_MS};
use crate::scroll::{hero_offset, indicator_opacity, ScrollThrottle};

/// Count the element's text up to its `data-target` value.
#[wasm_bindgen(js_name = animateCounter)]
pub fn animate_counter(element: HtmlElement) -> Result<(), JsValue> {
    let raw = element.get_attribute("data-target").unwrap_or_default();
    let mut counter = CounterAnimation::from_attribute(&raw)?;
    element.set_inner_text(CounterAnimation::initial_label());

    let window = window().ok_or("no window")?;
    let interval: Rc<RefCell<Option<i32>>> = Rc::new(RefCell::new(None));
    let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

    *slot.borrow_mut() = Some(Closure::wrap(Box::new({
        let window = window.clone();
        let interval = interval.clone();
        let slot = slot.clone();
        move || {
            element.set_inner_text(&counter.tick());
            if counter.is_finished() {
                if let Some(id) = interval.borrow_mut().take() {
                    window.clear_interval_with_handle(id);
                }
                // Releases this closure once the current call returns.
                slot.borrow_mut().take();
            }
        }
    }) as Box<dyn FnMut()>));

    let id = {
        let callback = slot.borrow();
        let callback = callback.as_ref().ok_or("counter callback missing")?;
        window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            DEFAULT_TICK_MS as i32,
        )?
    };
    *interval.borrow_mut() = Some(id);
    Ok(())
}

/// Hero parallax and scroll-indicator fade, applied at most once per frame.
#[wasm_bindgen(js_name = installScrollEffects)]
pub fn install_scroll_effects() -> Result<(), JsValue> {
    let window = window().ok_or("no window")?;
    let throttle = Rc::new(RefCell::new(ScrollThrottle::default()));

    let on_scroll = {
        let window = window.clone();
        Closure::wrap(Box::new(move || {
            let frame_throttle = throttle.clone();
            let requested = throttle.borrow_mut().request(|| {
                let frame = Closure::once_into_js(move || {
                    if let Err(err) = apply_scroll_effects() {
                        log::warn!("scroll effects failed: {err:?}");
                    }
                    frame_throttle.borrow_mut().on_frame();
                });
                window.request_animation_frame(frame.unchecked_ref()).map(|_| ())
            });
            if let Err(err) = requested {
                log::warn!("cannot schedule scroll effects: {err:?}");
            }
        }) as Box<dyn FnMut()>)
    };

    let options = AddEventListenerOptions::new();
    options.set_passive(true);
    window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        on_scroll.as_ref().unchecked_ref(),
        &options,
    )?;
    // Installed for the lifetime of the page.
    on_scroll.forget();
    Ok(())
}

fn apply_scroll_effects() -> Result<(), JsValue> {
    let window = window().ok_or("no window")?;
    let document = window.document().ok_or("no document")?;
    let scrolled = window.page_y_offset()?;
    let viewport = window.inner_height()?.as_f64().unwrap_or(0.0);

    if let Some(offset) = hero_offset(scrolled, viewport) {
        if let Some(hero) = styled(&document, ".hero .hero-content")? {
            hero.style()
                .set_property("transform", &format!("translateY({offset}px)"))?;
        }
    }
    if let Some(opacity) = indicator_opacity(scrolled) {
        if let Some(indicator) = styled(&document, ".scroll-indicator")? {
            indicator.style().set_property("opacity", &opacity.to_string())?;
        }
    }
    Ok(())
}

fn styled(document: &web_sys::Document, selector: &str) -> Result<Option<HtmlElement>, JsValue> {
    Ok(document
        .query_selector(selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

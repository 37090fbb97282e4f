//! Thin wrappers over the browser APIs the components need.
//!
//! Everything here looks elements up by id and degrades to a no-op when an
//! element or API is missing, logging at `warn`.

use gloo::events::EventListener;
use portfolio_core::{PortfolioError, PortfolioResult, Rect, Size, Subscription, Viewport};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions,
};

fn element(id: &str) -> Option<Element> {
    web_sys::window()?.document()?.get_element_by_id(id)
}

/// Current viewport size
pub fn viewport() -> Viewport {
    let dimension = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    match web_sys::window() {
        Some(w) => Viewport {
            width: dimension(w.inner_width()),
            height: dimension(w.inner_height()),
        },
        None => Viewport {
            width: 0.0,
            height: 0.0,
        },
    }
}

/// Bounding client rect of an element
pub fn rect(id: &str) -> Option<Rect> {
    let r = element(id)?.get_bounding_client_rect();
    Some(Rect {
        left: r.left(),
        top: r.top(),
        width: r.width(),
        height: r.height(),
    })
}

pub fn size(id: &str) -> Size {
    rect(id)
        .map(|r| Size {
            width: r.width,
            height: r.height,
        })
        .unwrap_or_default()
}

/// Set the body's `overflow` style ("" restores the stylesheet value)
pub fn set_body_overflow(value: &str) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    let Some(body) = body else {
        tracing::warn!("No document body; cannot set overflow");
        return;
    };
    let style = body.style();
    let result = if value.is_empty() {
        style.remove_property("overflow").map(|_| ())
    } else {
        style.set_property("overflow", value)
    };
    if let Err(e) = result {
        tracing::warn!("Failed to set body overflow: {:?}", e);
    }
}

pub fn scroll_top(id: &str) -> f64 {
    element(id).map(|e| e.scroll_top() as f64).unwrap_or(0.0)
}

/// Jump an element's scroll offset without animation
pub fn set_scroll_top(id: &str, top: f64) {
    if let Some(e) = element(id) {
        e.set_scroll_top(top as i32);
    }
}

/// Smoothly scroll an element's contents to `top`
pub fn smooth_scroll_to(id: &str, top: f64) {
    let Some(e) = element(id) else {
        return;
    };
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    e.scroll_to_with_scroll_to_options(&options);
}

/// Smoothly bring an element to the top of the viewport
pub fn scroll_into_view(id: &str) -> PortfolioResult<()> {
    let e = element(id).ok_or_else(|| PortfolioError::Dom(format!("no element #{}", id)))?;
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Start);
    e.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}

type EntriesCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// A live `IntersectionObserver` watching one element
pub struct IntersectionSubscription {
    observer: Option<IntersectionObserver>,
    _callback: EntriesCallback,
}

impl IntersectionSubscription {
    /// Observe element `id`; `on_change` receives `isIntersecting` per entry
    pub fn observe(
        id: &str,
        root_margin: &str,
        threshold: f64,
        mut on_change: impl FnMut(bool) + 'static,
    ) -> PortfolioResult<Self> {
        let target =
            element(id).ok_or_else(|| PortfolioError::Dom(format!("no element #{}", id)))?;

        let callback: EntriesCallback =
            Closure::new(move |entries: js_sys::Array, _: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        on_change(entry.is_intersecting());
                    }
                }
            });

        let options = IntersectionObserverInit::new();
        options.set_root_margin(root_margin);
        options.set_threshold(&JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| PortfolioError::Dom(format!("IntersectionObserver: {:?}", e)))?;
        observer.observe(&target);

        Ok(Self {
            observer: Some(observer),
            _callback: callback,
        })
    }
}

impl Subscription for IntersectionSubscription {
    fn unsubscribe(&mut self) {
        if let Some(observer) = self.observer.take() {
            observer.disconnect();
        }
    }
}

impl Drop for IntersectionSubscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

/// A window event listener, removed on unsubscribe
pub struct WindowListener(Option<EventListener>);

impl WindowListener {
    pub fn new(
        event: &'static str,
        callback: impl FnMut(&web_sys::Event) + 'static,
    ) -> PortfolioResult<Self> {
        let window =
            web_sys::window().ok_or_else(|| PortfolioError::Dom("no window".to_string()))?;
        Ok(Self(Some(EventListener::new(&window, event, callback))))
    }
}

impl Subscription for WindowListener {
    fn unsubscribe(&mut self) {
        // Dropping the gloo listener removes it from the window
        self.0.take();
    }
}

//! Viewport visibility detection.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::js_sys;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::Result;

/// Options handed to the underlying observer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WatchOptions {
    pub threshold: f64,
    pub root_margin: Option<&'static str>,
}

/// One visibility report for a watched element.
pub struct VisibilityChange {
    target: Element,
    is_intersecting: bool,
    observer: IntersectionObserver,
}

impl VisibilityChange {
    pub fn target(&self) -> &Element {
        &self.target
    }

    pub fn is_visible(&self) -> bool {
        self.is_intersecting
    }

    /// Stop reporting changes for this element.
    pub fn stop_watching(&self) {
        self.observer.unobserve(&self.target);
    }
}

/// Watches elements entering and leaving the viewport.
///
/// Dropping the watcher disconnects the observer and releases its callback.
pub struct VisibilityWatcher {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>,
}

impl VisibilityWatcher {
    pub fn new(options: WatchOptions, mut on_change: impl FnMut(VisibilityChange) + 'static) -> Result<Self> {
        let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
            move |entries: js_sys::Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        on_change(VisibilityChange {
                            target: entry.target(),
                            is_intersecting: entry.is_intersecting(),
                            observer: observer.clone(),
                        });
                    }
                }
            },
        );

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        if let Some(margin) = options.root_margin {
            init.set_root_margin(margin);
        }
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;

        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, element: &Element) {
        self.observer.observe(element);
    }
}

impl Drop for VisibilityWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Whether a box spanning `top..bottom` (viewport coordinates) sits inside a
/// viewport of `viewport_height`, shrunk by `offset` on both edges.
pub fn is_in_viewport(top: f64, bottom: f64, viewport_height: f64, offset: f64) -> bool {
    top <= viewport_height - offset && bottom >= offset
}

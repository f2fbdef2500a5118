use std::cell::Cell;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use crate::error::DomError;

/// When a watched element counts as visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WatchOptions {
    /// Fraction of the element that must be inside the trigger zone.
    pub threshold: f64,
    /// Offset of the trigger zone's bottom edge from the viewport bottom, in px.
    /// Negative values pull the edge up.
    pub bottom_margin: i32,
}

impl WatchOptions {
    pub fn new(threshold: f64, bottom_margin: i32) -> Self {
        Self { threshold, bottom_margin }
    }

    pub fn root_margin(&self) -> String {
        format!("0px 0px {}px 0px", self.bottom_margin)
    }
}

/// A flag that can be tripped once.
#[derive(Debug, Default)]
pub struct OneShot(Cell<bool>);

impl OneShot {
    pub fn new() -> Self {
        Self::default()
    }

    /// True the first time it is called, false ever after.
    pub fn fire(&self) -> bool {
        !self.0.replace(true)
    }
}

pub fn is_supported(window: &Window) -> bool {
    Reflect::has(window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false)
}

type EntryCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

/// Owns an `IntersectionObserver` and its callback; disconnects on drop.
pub struct VisibilityWatcher {
    observer: IntersectionObserver,
    _callback: EntryCallback,
}

impl VisibilityWatcher {
    /// `on_visible` receives every entry that is intersecting, along with the
    /// observer so the handler can stop watching its target.
    pub fn new<F>(options: WatchOptions, mut on_visible: F) -> Result<Self, DomError>
    where
        F: FnMut(&Element, &IntersectionObserver) + 'static,
    {
        let callback: EntryCallback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    on_visible(&entry.target(), &observer);
                }
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin());

        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        Ok(Self {
            observer,
            _callback: callback,
        })
    }

    pub fn observe(&self, target: &Element) {
        self.observer.observe(target);
    }
}

impl Drop for VisibilityWatcher {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

use std::fmt;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList, Window};

use crate::error::DomError;

/// The handful of element operations the animators need.
///
/// Implemented for real DOM elements and, in tests, for an in-memory node.
pub trait Markup: Clone + 'static {
    fn add_class(&self, class: &str);
    fn has_class(&self, class: &str) -> bool;
    fn text(&self) -> String;
    fn set_text(&self, text: &str);
    fn set_style_property(&self, name: &str, value: &str);
    /// Rendered width in px.
    fn width(&self) -> f64;
}

impl Markup for Element {
    fn add_class(&self, class: &str) {
        logged(self.class_list().add_1(class), "add class", class);
    }

    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn text(&self) -> String {
        self.text_content().unwrap_or_default()
    }

    fn set_text(&self, text: &str) {
        self.set_text_content(Some(text));
    }

    fn set_style_property(&self, name: &str, value: &str) {
        if let Some(html) = self.dyn_ref::<HtmlElement>() {
            logged(html.style().set_property(name, value), "set style", name);
        }
    }

    fn width(&self) -> f64 {
        self.dyn_ref::<HtmlElement>()
            .map(|html| f64::from(html.offset_width()))
            .unwrap_or(0.0)
    }
}

/// Logs a failed best-effort DOM write at debug; returns whether it went through.
fn logged<E: fmt::Debug>(result: Result<(), E>, action: &str, subject: &str) -> bool {
    match result {
        Ok(()) => true,
        Err(err) => {
            log::debug!("could not {} {:?}: {:?}", action, subject, err);
            false
        }
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn document() -> Result<Document, DomError> {
    window()?.document().ok_or(DomError::NoDocument)
}

pub fn viewport_width() -> f64 {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

pub fn viewport_height(window: &Window) -> f64 {
    window
        .inner_height()
        .ok()
        .and_then(|h| h.as_f64())
        .unwrap_or(0.0)
}

pub fn query(root: &Element, selector: &str) -> Result<Option<Element>, DomError> {
    Ok(root.query_selector(selector)?)
}

pub fn query_all(root: &Element, selector: &str) -> Result<Vec<Element>, DomError> {
    Ok(elements(root.query_selector_all(selector)?))
}

pub fn document_query(document: &Document, selector: &str) -> Result<Option<Element>, DomError> {
    Ok(document.query_selector(selector)?)
}

pub fn document_query_all(document: &Document, selector: &str) -> Result<Vec<Element>, DomError> {
    Ok(elements(document.query_selector_all(selector)?))
}

fn elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Whether `target` (an event target) is `selector` or sits inside one.
pub fn target_within(target: Option<&Element>, selector: &str) -> bool {
    target
        .and_then(|el| el.closest(selector).ok().flatten())
        .is_some()
}

/// A window event listener that unregisters itself when dropped.
pub struct WindowListener {
    window: Window,
    event: &'static str,
    callback: Closure<dyn FnMut()>,
}

impl WindowListener {
    pub fn new<F>(window: &Window, event: &'static str, handler: F) -> Result<Self, DomError>
    where
        F: FnMut() + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut()>);
        window.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self {
            window: window.clone(),
            event,
            callback,
        })
    }
}

impl Drop for WindowListener {
    fn drop(&mut self) {
        let result = self
            .window
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
        logged(result, "remove listener", self.event);
    }
}

#[cfg(test)]
pub mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::Markup;

    #[derive(Debug, Default)]
    struct FakeState {
        classes: Vec<String>,
        text: String,
        history: Vec<String>,
        style: Vec<(String, String)>,
        width: f64,
    }

    /// In-memory stand-in for a DOM element.
    #[derive(Debug, Clone, Default)]
    pub struct FakeNode(Rc<RefCell<FakeState>>);

    impl FakeNode {
        pub fn with_text(text: &str) -> Self {
            let node = Self::default();
            node.0.borrow_mut().text = text.to_string();
            node
        }

        pub fn with_classes(classes: &[&str]) -> Self {
            let node = Self::default();
            for class in classes {
                node.add_class(class);
            }
            node
        }

        pub fn set_width(&self, width: f64) {
            self.0.borrow_mut().width = width;
        }

        /// Every text value written through `set_text`, oldest first.
        pub fn history(&self) -> Vec<String> {
            self.0.borrow().history.clone()
        }

        pub fn style(&self, name: &str) -> Option<String> {
            self.0
                .borrow()
                .style
                .iter()
                .rev()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
        }
    }

    impl Markup for FakeNode {
        fn add_class(&self, class: &str) {
            let mut state = self.0.borrow_mut();
            if !state.classes.iter().any(|c| c == class) {
                state.classes.push(class.to_string());
            }
        }

        fn has_class(&self, class: &str) -> bool {
            self.0.borrow().classes.iter().any(|c| c == class)
        }

        fn text(&self) -> String {
            self.0.borrow().text.clone()
        }

        fn set_text(&self, text: &str) {
            let mut state = self.0.borrow_mut();
            state.text = text.to_string();
            state.history.push(text.to_string());
        }

        fn set_style_property(&self, name: &str, value: &str) {
            self.0
                .borrow_mut()
                .style
                .push((name.to_string(), value.to_string()));
        }

        fn width(&self) -> f64 {
            self.0.borrow().width
        }
    }
}

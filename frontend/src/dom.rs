//! Thin helpers over `web_sys` for looking up elements, writing inline
//! styles and attaching listeners that live for the whole page session.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, EventTarget, HtmlElement, Window};

use crate::error::SetupError;

pub fn window() -> Result<Window, SetupError> {
    web_sys::window().ok_or(SetupError::NoWindow)
}

pub fn document() -> Result<Document, SetupError> {
    window()?.document().ok_or(SetupError::NoDocument)
}

pub fn body() -> Result<HtmlElement, SetupError> {
    document()?.body().ok_or(SetupError::NoBody)
}

/// All elements matching `selector`, in document order. Non-HTML matches are skipped.
pub fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, SetupError> {
    let nodes = document.query_selector_all(selector)?;
    let mut elements = Vec::with_capacity(nodes.length() as usize);
    for i in 0..nodes.length() {
        if let Some(element) = nodes.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
            elements.push(element);
        }
    }
    Ok(elements)
}

pub fn query_one(document: &Document, selector: &str) -> Result<Option<HtmlElement>, SetupError> {
    Ok(document
        .query_selector(selector)?
        .and_then(|e| e.dyn_into::<HtmlElement>().ok()))
}

pub fn require_one(document: &Document, selector: &str) -> Result<HtmlElement, SetupError> {
    query_one(document, selector)?.ok_or_else(|| SetupError::missing(selector))
}

pub fn require_id(document: &Document, id: &str) -> Result<HtmlElement, SetupError> {
    document
        .get_element_by_id(id)
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
        .ok_or_else(|| SetupError::missing(&format!("#{}", id)))
}

pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(e) = element.style().set_property(property, value) {
        log::warn!("Failed to set {} on element: {:?}", property, e);
    }
}

pub fn set_class(element: &HtmlElement, class: &str, on: bool) {
    let classes = element.class_list();
    let result = if on {
        classes.add_1(class)
    } else {
        classes.remove_1(class)
    };
    if let Err(e) = result {
        log::warn!("Failed to toggle class {}: {:?}", class, e);
    }
}

pub fn set_transform(element: &HtmlElement, value: &str) {
    set_style(element, "transform", value);
}

/// Viewport size in CSS pixels.
pub fn viewport(window: &Window) -> (f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (width, height)
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

/// Attach `handler` to `target` for the rest of the session.
pub fn listen<E, F>(target: &EventTarget, event: &str, mut handler: F) -> Result<(), SetupError>
where
    E: JsCast + 'static,
    F: FnMut(E) + 'static,
{
    let callback = Closure::wrap(Box::new(move |e: Event| {
        if let Ok(e) = e.dyn_into::<E>() {
            handler(e);
        }
    }) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    // Page listeners are never removed.
    callback.forget();
    Ok(())
}

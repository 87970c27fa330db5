use log::{debug, info};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    js_sys, Event, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

use crate::config;
use crate::dom;
use crate::error::SetupError;
use crate::timing::FrameThrottle;

pub const HIDDEN_OPACITY: &str = "0";
pub const REVEALED_OPACITY: &str = "1";
pub const REVEALED_TRANSFORM: &str = "translateY(0)";

pub fn hidden_transform() -> String {
    format!("translateY({}px)", config::REVEAL_OFFSET_PX)
}

pub fn hero_transform(scroll_top: f64) -> String {
    format!("translateY({}px)", scroll_top * config::HERO_PARALLAX_FACTOR)
}

fn reveal(element: &HtmlElement) {
    dom::set_style(element, "opacity", REVEALED_OPACITY);
    dom::set_transform(element, REVEALED_TRANSFORM);
}

fn observe_sections() -> Result<usize, SetupError> {
    let document = dom::document()?;
    let sections = dom::query_all(&document, config::SECTION_SELECTOR)?;

    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(section) = target.dyn_ref::<HtmlElement>() {
                    reveal(section);
                }
                // Revealed sections stay revealed.
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config::REVEAL_THRESHOLD));
    options.set_root_margin(config::REVEAL_ROOT_MARGIN);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    callback.forget();

    let hidden = hidden_transform();
    for section in &sections {
        dom::set_style(section, "opacity", HIDDEN_OPACITY);
        dom::set_transform(section, &hidden);
        dom::set_style(section, "transition", config::REVEAL_TRANSITION);
        observer.observe(section);
    }
    Ok(sections.len())
}

fn bind_hero_parallax() -> Result<(), SetupError> {
    let window = dom::window()?;
    let document = dom::document()?;
    let hero = dom::query_one(&document, config::HERO_SELECTOR)?;
    let content = dom::query_one(&document, config::HERO_CONTENT_SELECTOR)?;
    let (Some(_), Some(content)) = (hero, content) else {
        debug!("No hero content on this page, skipping parallax");
        return Ok(());
    };

    let parallax = FrameThrottle::new(move |scroll_top: f64| {
        dom::set_transform(&content, &hero_transform(scroll_top));
    });
    let scroll_window = window.clone();
    dom::listen(&window, "scroll", move |_: Event| {
        parallax.push(dom::scroll_y(&scroll_window));
    })?;
    Ok(())
}

pub fn init_animations() -> Result<(), SetupError> {
    let observed = observe_sections()?;
    bind_hero_parallax()?;
    info!("Reveal animations watching {} sections", observed);
    Ok(())
}

use log::info;
use web_sys::Event;

use crate::config;
use crate::dom;
use crate::error::SetupError;
use crate::timing::Debouncer;

/// The indicator stays visible until the page is scrolled past half a viewport.
pub fn indicator_visible(scroll_top: f64, viewport_height: f64) -> bool {
    scroll_top <= viewport_height * 0.5
}

/// Inline `(opacity, pointer-events)` for the indicator.
pub fn indicator_style(visible: bool) -> (&'static str, &'static str) {
    if visible {
        ("1", "auto")
    } else {
        ("0", "none")
    }
}

pub fn init_scroll_indicator() -> Result<(), SetupError> {
    let window = dom::window()?;
    let document = dom::document()?;
    let indicator = dom::require_one(&document, config::SCROLL_INDICATOR_SELECTOR)?;

    let update = {
        let window = window.clone();
        move || {
            let (_, height) = dom::viewport(&window);
            let (opacity, pointer_events) =
                indicator_style(indicator_visible(dom::scroll_y(&window), height));
            dom::set_style(&indicator, "opacity", opacity);
            dom::set_style(&indicator, "pointer-events", pointer_events);
        }
    };
    update();
    let debounced = Debouncer::new(config::SCROLL_DEBOUNCE_MS, update);
    dom::listen(&window, "scroll", move |_: Event| debounced.trigger())?;

    info!("Scroll indicator bound");
    Ok(())
}

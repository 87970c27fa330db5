use log::{debug, info};
use web_sys::{Event, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use crate::config;
use crate::dom;
use crate::error::SetupError;

/// The element id an in-page link points at. `#` alone points at nothing.
pub fn fragment_target(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

pub fn init_smooth_scrolling() -> Result<(), SetupError> {
    let document = dom::document()?;
    let links = dom::query_all(&document, config::FRAGMENT_LINK_SELECTOR)?;

    for link in links.iter() {
        let document = document.clone();
        let anchor = link.clone();
        dom::listen(link, "click", move |e: Event| {
            e.prevent_default();
            let Some(href) = anchor.get_attribute("href") else {
                return;
            };
            let Some(target) = fragment_target(&href).and_then(|id| document.get_element_by_id(id))
            else {
                debug!("No scroll target for {}", href);
                return;
            };
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        })?;
    }

    info!("Smooth scrolling bound to {} links", links.len());
    Ok(())
}

use std::rc::Rc;

use log::{info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys::{js_sys, Event, HtmlElement};

use crate::config;
use crate::dom;
use crate::error::SetupError;
use crate::storage::{self, KeyValueStore};

pub fn is_accepted<S: KeyValueStore + ?Sized>(store: &S) -> bool {
    store
        .get(config::COOKIES_ACCEPTED_KEY)
        .is_some_and(|marker| !marker.is_empty())
}

pub fn record_acceptance<S: KeyValueStore + ?Sized>(store: &S) {
    store.set(config::COOKIES_ACCEPTED_KEY, config::COOKIES_ACCEPTED_VALUE);
}

fn hide(banner: &HtmlElement) {
    dom::set_style(banner, "display", "none");
}

fn accept(banner: &HtmlElement, store: &dyn KeyValueStore) {
    hide(banner);
    record_acceptance(store);
    info!("Cookie consent recorded");
}

/// Hides the banner right away when consent was given on an earlier visit,
/// and wires its accept controls.
pub fn init_cookie_banner(store: Rc<dyn KeyValueStore>) -> Result<(), SetupError> {
    let document = dom::document()?;
    let banner = dom::require_id(&document, config::COOKIE_BANNER_ID)?;

    if is_accepted(&*store) {
        hide(&banner);
    }

    let controls = banner.query_selector_all(config::COOKIE_ACCEPT_SELECTOR)?;
    for i in 0..controls.length() {
        let Some(control) = controls.get(i) else {
            continue;
        };
        let banner = banner.clone();
        let store = store.clone();
        dom::listen(&control, "click", move |_: Event| accept(&banner, &*store))?;
    }
    Ok(())
}

/// Hides the banner and records consent in the session store.
#[wasm_bindgen(js_name = acceptCookies)]
pub fn accept_cookies() {
    let banner = dom::document().and_then(|d| dom::require_id(&d, config::COOKIE_BANNER_ID));
    match banner {
        Ok(banner) => accept(&banner, &*storage::session_store()),
        Err(e) => warn!("Cannot accept cookies: {}", e),
    }
}

/// Publishes `window.acceptCookies` so inline `onclick="acceptCookies()"`
/// markup reaches [`accept_cookies`].
pub fn expose_accept_cookies() -> Result<(), SetupError> {
    let window = dom::window()?;
    let callback = Closure::wrap(Box::new(accept_cookies) as Box<dyn FnMut()>);
    js_sys::Reflect::set(&window, &JsValue::from_str("acceptCookies"), callback.as_ref())?;
    callback.forget();
    Ok(())
}

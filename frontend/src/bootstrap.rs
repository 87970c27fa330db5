//! Startup ordering for the page behaviours.
//!
//! Initializers run independently: one that fails is logged and the rest
//! still run. The `ready` flag flips once, on window load, and adds the
//! `loaded` body class that ends the splash screen in `static/splash.css`.

use std::cell::Cell;
use std::rc::Rc;

use log::{error, info};
use web_sys::{Event, EventTarget};

use crate::config;
use crate::consent;
use crate::dom;
use crate::error::SetupError;
use crate::floating_cards;
use crate::interactions;
use crate::reveal;
use crate::scroll_indicator;
use crate::smooth_scroll;
use crate::storage::{self, KeyValueStore};
use crate::theme;

thread_local! {
    static READY: Cell<bool> = const { Cell::new(false) };
}

pub fn is_ready() -> bool {
    READY.with(|ready| ready.get())
}

/// Flips the ready flag and marks the body loaded. Only the first call has an effect.
pub fn mark_loaded() -> Result<(), SetupError> {
    if READY.with(|ready| ready.replace(true)) {
        return Ok(());
    }
    dom::body()?.class_list().add_1(config::LOADED_CLASS)?;
    info!("Page loaded");
    Ok(())
}

fn run_once<F>(target: &EventTarget, event: &str, action: F) -> Result<(), SetupError>
where
    F: FnOnce() + 'static,
{
    let mut action = Some(action);
    dom::listen(target, event, move |_: Event| {
        if let Some(action) = action.take() {
            action();
        }
    })
}

/// Runs `action` once the document is parsed, or right away if it already is.
pub fn on_content_ready<F>(action: F) -> Result<(), SetupError>
where
    F: FnOnce() + 'static,
{
    let document = dom::document()?;
    if document.ready_state() == "loading" {
        run_once(&document, "DOMContentLoaded", action)
    } else {
        action();
        Ok(())
    }
}

/// Runs `action` once every page resource has loaded, or right away if it already has.
pub fn on_window_load<F>(action: F) -> Result<(), SetupError>
where
    F: FnOnce() + 'static,
{
    let window = dom::window()?;
    let document = dom::document()?;
    if document.ready_state() == "complete" {
        action();
        return Ok(());
    }
    run_once(&window, "load", action)
}

fn run_step(name: &str, result: Result<(), SetupError>) {
    if let Err(e) = result {
        error!("{} setup failed: {}", name, e);
    }
}

fn init_page(store: Rc<dyn KeyValueStore>) {
    run_step("Floating cards", floating_cards::init_floating_cards());
    run_step("Theme toggle", theme::init_theme_toggle(store));
    run_step("Scroll indicator", scroll_indicator::init_scroll_indicator());
    run_step("Smooth scrolling", smooth_scroll::init_smooth_scrolling());
    run_step("Animations", reveal::init_animations());
}

pub fn run() -> Result<(), SetupError> {
    let store = storage::session_store();
    run_step("Global acceptCookies", consent::expose_accept_cookies());

    let consent_store = store.clone();
    on_content_ready(move || {
        run_step("Cookie banner", consent::init_cookie_banner(consent_store));
    })?;
    on_content_ready(move || init_page(store))?;
    on_content_ready(|| run_step("Interactions", interactions::init_interactions()))?;
    on_window_load(|| run_step("Loaded state", mark_loaded()))?;
    Ok(())
}

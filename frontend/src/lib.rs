//! Behaviour layer for the Cosmos landing page: floating cards, theme
//! switching, scroll effects, reveal animations and small interaction
//! effects, bound to markup the page already ships.

use log::info;
use wasm_bindgen::prelude::*;

pub mod bootstrap;
pub mod config;
pub mod consent;
pub mod dom;
pub mod error;
pub mod floating_cards;
pub mod interactions;
pub mod reveal;
pub mod scroll_indicator;
pub mod smooth_scroll;
pub mod storage;
pub mod theme;
pub mod timing;

pub use error::SetupError;
pub use theme::{Theme, ThemeStore};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // The host page may have installed a logger already
    let _ = console_log::init_with_level(config::log_level());

    info!("Starting Cosmos page script");
    bootstrap::run()?;
    Ok(())
}

use std::rc::Rc;

use log::info;
use web_sys::{Event, HtmlElement};

use crate::config;
use crate::dom;
use crate::error::SetupError;
use crate::timing::CancelableTask;

pub const HOVER_LIFT: &str = "translateY(-2px)";
pub const HOVER_REST: &str = "translateY(0)";

/// Two-phase feedback for clickable cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PressFeedback {
    pub pressed: &'static str,
    pub released: &'static str,
}

pub const EXTENSION_CARD_PRESS: PressFeedback = PressFeedback {
    pressed: "scale(0.95)",
    released: "translateY(-4px)",
};

pub const CLUSTER_CARD_PRESS: PressFeedback = PressFeedback {
    pressed: "scale(0.98)",
    released: "translateY(-2px)",
};

/// Selection state of a group of `len` controls after `clicked` is activated.
pub fn exclusive_selection(len: usize, clicked: usize) -> Vec<bool> {
    (0..len).map(|i| i == clicked).collect()
}

fn bind_button_hover(buttons: &[HtmlElement]) -> Result<(), SetupError> {
    for button in buttons {
        let lifted = button.clone();
        dom::listen(button, "mouseenter", move |_: Event| {
            dom::set_transform(&lifted, HOVER_LIFT);
        })?;
        let rested = button.clone();
        dom::listen(button, "mouseleave", move |_: Event| {
            dom::set_transform(&rested, HOVER_REST);
        })?;
    }
    Ok(())
}

fn bind_categories(categories: Vec<HtmlElement>) -> Result<(), SetupError> {
    let group = Rc::new(categories);
    for (index, category) in group.iter().enumerate() {
        let group = group.clone();
        dom::listen(category, "click", move |_: Event| {
            for (member, active) in group.iter().zip(exclusive_selection(group.len(), index)) {
                dom::set_class(member, config::ACTIVE_CLASS, active);
            }
        })?;
    }
    Ok(())
}

fn bind_press_feedback(cards: &[HtmlElement], feedback: PressFeedback) -> Result<(), SetupError> {
    for card in cards {
        let card_el = card.clone();
        // One pending release per card; a new press restarts it.
        let release = CancelableTask::new();
        dom::listen(card, "click", move |_: Event| {
            dom::set_transform(&card_el, feedback.pressed);
            let settled = card_el.clone();
            release.schedule(config::PRESS_RELEASE_DELAY_MS, move || {
                dom::set_transform(&settled, feedback.released);
            });
        })?;
    }
    Ok(())
}

pub fn init_interactions() -> Result<(), SetupError> {
    let document = dom::document()?;

    let buttons = dom::query_all(&document, config::BUTTON_SELECTOR)?;
    bind_button_hover(&buttons)?;

    let categories = dom::query_all(&document, config::CATEGORY_SELECTOR)?;
    let category_count = categories.len();
    bind_categories(categories)?;

    let extension_cards = dom::query_all(&document, config::EXTENSION_CARD_SELECTOR)?;
    bind_press_feedback(&extension_cards, EXTENSION_CARD_PRESS)?;
    let cluster_cards = dom::query_all(&document, config::CLUSTER_CARD_SELECTOR)?;
    bind_press_feedback(&cluster_cards, CLUSTER_CARD_PRESS)?;

    info!(
        "Interactions bound: {} buttons, {} categories, {} cards",
        buttons.len(),
        category_count,
        extension_cards.len() + cluster_cards.len()
    );
    Ok(())
}

//! The decorative card field behind the hero: a fixed set of image cards
//! scattered at random, drifting on their CSS animation, and nudged by the
//! pointer with a per-card depth.

use std::rc::Rc;

use log::info;
use wasm_bindgen::JsCast;
use web_sys::{js_sys, HtmlElement, HtmlImageElement, MouseEvent};

use crate::config;
use crate::dom;
use crate::error::SetupError;
use crate::timing::FrameThrottle;

#[derive(Debug, Clone, PartialEq)]
pub struct CardLayout {
    pub image: &'static str,
    pub left_pct: f64,
    pub top_pct: f64,
    pub delay_s: f64,
    pub duration_s: f64,
}

/// Lays out `count` cards. `random` yields uniform samples in `[0, 1)`.
pub fn generate_layouts<R>(count: usize, mut random: R) -> Vec<CardLayout>
where
    R: FnMut() -> f64,
{
    let pool = &config::FLOATING_CARD_IMAGES;
    (0..count)
        .map(|i| CardLayout {
            image: pool[i % pool.len()],
            left_pct: random() * config::CARD_POSITION_SPAN_PCT + config::CARD_POSITION_MIN_PCT,
            top_pct: random() * config::CARD_POSITION_SPAN_PCT + config::CARD_POSITION_MIN_PCT,
            delay_s: random() * config::CARD_DELAY_MAX_S,
            duration_s: config::CARD_DURATION_MIN_S + random() * config::CARD_DURATION_SPAN_S,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardTransform {
    pub x: f64,
    pub y: f64,
    pub rotate_deg: f64,
}

impl CardTransform {
    pub fn to_css(self) -> String {
        format!(
            "translate({}px, {}px) rotate({}deg)",
            self.x, self.y, self.rotate_deg
        )
    }
}

/// Depth factor for the card at `index`; later cards move further.
pub fn card_speed(index: usize) -> f64 {
    config::PARALLAX_BASE_SPEED + index as f64 * config::PARALLAX_SPEED_STEP
}

/// Offset of card `index` for a pointer at `pointer` in a viewport of `viewport` size.
pub fn parallax_transform(index: usize, pointer: (f64, f64), viewport: (f64, f64)) -> CardTransform {
    let normalized = |pos: f64, extent: f64| if extent > 0.0 { pos / extent } else { 0.5 };
    let speed = card_speed(index);
    let x = (normalized(pointer.0, viewport.0) - 0.5) * speed * config::PARALLAX_AMPLITUDE_PX;
    let y = (normalized(pointer.1, viewport.1) - 0.5) * speed * config::PARALLAX_AMPLITUDE_PX;
    CardTransform {
        x,
        y,
        rotate_deg: x * config::PARALLAX_ROTATION_FACTOR,
    }
}

fn build_card(document: &web_sys::Document, layout: &CardLayout) -> Result<HtmlElement, SetupError> {
    let card: HtmlElement = document.create_element("div")?.unchecked_into();
    card.set_class_name(config::FLOATING_CARD_CLASS);

    let img: HtmlImageElement = document.create_element("img")?.unchecked_into();
    img.set_src(layout.image);
    img.set_alt(config::FLOATING_CARD_ALT);
    card.append_child(&img)?;

    dom::set_style(&card, "left", &format!("{}%", layout.left_pct));
    dom::set_style(&card, "top", &format!("{}%", layout.top_pct));
    dom::set_style(&card, "animation-delay", &format!("{}s", layout.delay_s));
    dom::set_style(&card, "animation-duration", &format!("{}s", layout.duration_s));
    Ok(card)
}

pub fn init_floating_cards() -> Result<(), SetupError> {
    let window = dom::window()?;
    let document = dom::document()?;
    let container = dom::require_id(&document, config::FLOATING_CARDS_ID)?;

    let layouts = generate_layouts(config::FLOATING_CARD_COUNT, js_sys::Math::random);
    let mut cards = Vec::with_capacity(layouts.len());
    for layout in &layouts {
        let card = build_card(&document, layout)?;
        container.append_child(&card)?;
        cards.push(card);
    }
    let cards = Rc::new(cards);

    let parallax = {
        let window = window.clone();
        FrameThrottle::new(move |pointer: (f64, f64)| {
            let viewport = dom::viewport(&window);
            for (index, card) in cards.iter().enumerate() {
                dom::set_transform(card, &parallax_transform(index, pointer, viewport).to_css());
            }
        })
    };
    dom::listen(&document, "mousemove", move |e: MouseEvent| {
        parallax.push((e.client_x() as f64, e.client_y() as f64));
    })?;

    info!("Created {} floating cards", layouts.len());
    Ok(())
}

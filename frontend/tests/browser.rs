#![cfg(target_arch = "wasm32")]

use std::rc::Rc;

use cosmos_frontend::storage::{set_session_store, KeyValueStore, MemoryStore};
use cosmos_frontend::{
    bootstrap, consent, floating_cards, interactions, reveal, scroll_indicator, smooth_scroll,
    theme,
};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_test::*;
use web_sys::{js_sys, window, Document, Element, Event, EventInit, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    window().unwrap().document().unwrap()
}

fn fixture(markup: &str) -> Element {
    let doc = document();
    let root = doc.create_element("div").unwrap();
    root.set_inner_html(markup);
    doc.body().unwrap().append_child(&root).unwrap();
    root
}

fn by_id(id: &str) -> HtmlElement {
    document()
        .get_element_by_id(id)
        .unwrap()
        .dyn_into::<HtmlElement>()
        .unwrap()
}

fn scroll_to(y: f64) {
    window().unwrap().scroll_to_with_x_and_y(0.0, y);
}

fn scroll_y() -> f64 {
    window().unwrap().scroll_y().unwrap()
}

fn viewport_height() -> f64 {
    window().unwrap().inner_height().unwrap().as_f64().unwrap()
}

const SPACER: &str = r#"<div style="height: 4000px"></div>"#;

fn style(element: &HtmlElement, property: &str) -> String {
    element.style().get_property_value(property).unwrap()
}

fn is_active(element: &HtmlElement) -> bool {
    element.class_list().contains("active")
}

const THEME_MARKUP: &str = r#"
    <button id="t-dark" class="theme-btn" data-theme="dark"></button>
    <button id="t-light" class="theme-btn" data-theme="light"></button>
    <button id="t-auto" class="theme-btn" data-theme="auto"></button>
"#;

#[wasm_bindgen_test]
fn fresh_load_applies_dark_theme() {
    let root = fixture(THEME_MARKUP);
    let store = Rc::new(MemoryStore::new());
    theme::init_theme_toggle(store).unwrap();

    let html = document().document_element().unwrap();
    assert_eq!(html.get_attribute("data-theme").as_deref(), Some("dark"));
    assert!(is_active(&by_id("t-dark")));
    assert!(!is_active(&by_id("t-light")));
    assert!(!is_active(&by_id("t-auto")));
    root.remove();
}

#[wasm_bindgen_test]
fn clicking_a_theme_control_switches_and_persists() {
    let root = fixture(THEME_MARKUP);
    let store = Rc::new(MemoryStore::new());
    theme::init_theme_toggle(store.clone()).unwrap();

    by_id("t-light").click();

    let html = document().document_element().unwrap();
    assert_eq!(html.get_attribute("data-theme").as_deref(), Some("light"));
    assert_eq!(store.get("theme").as_deref(), Some("light"));
    assert!(is_active(&by_id("t-light")));
    assert!(!is_active(&by_id("t-dark")));
    assert!(!is_active(&by_id("t-auto")));
    root.remove();

    // A reload restores the same choice.
    let root = fixture(THEME_MARKUP);
    theme::init_theme_toggle(store).unwrap();
    assert!(is_active(&by_id("t-light")));
    root.remove();
}

const BANNER_MARKUP: &str = r#"
    <div id="cookieBanner"><button id="accept" data-action="accept-cookies"></button></div>
"#;

#[wasm_bindgen_test]
fn banner_shows_until_accepted() {
    let root = fixture(BANNER_MARKUP);
    let store: Rc<MemoryStore> = Rc::new(MemoryStore::new());
    consent::init_cookie_banner(store.clone()).unwrap();
    assert_eq!(style(&by_id("cookieBanner"), "display"), "");

    by_id("accept").click();
    assert_eq!(style(&by_id("cookieBanner"), "display"), "none");
    assert_eq!(store.get("cookiesAccepted").as_deref(), Some("true"));
    root.remove();

    let root = fixture(BANNER_MARKUP);
    consent::init_cookie_banner(store).unwrap();
    assert_eq!(style(&by_id("cookieBanner"), "display"), "none");
    root.remove();
}

#[wasm_bindgen_test]
fn missing_banner_is_a_setup_error() {
    let err = consent::init_cookie_banner(Rc::new(MemoryStore::new())).unwrap_err();
    assert_eq!(err, cosmos_frontend::SetupError::missing("#cookieBanner"));
}

#[wasm_bindgen_test]
fn twelve_cards_are_scattered_in_the_field() {
    let root = fixture(r#"<div id="floatingCards"></div>"#);
    floating_cards::init_floating_cards().unwrap();

    let container = by_id("floatingCards");
    let cards = container.query_selector_all(".floating-card").unwrap();
    assert_eq!(cards.length(), 12);
    for i in 0..cards.length() {
        let card: HtmlElement = cards.get(i).unwrap().unchecked_into();
        let pct = |prop: &str| style(&card, prop).trim_end_matches('%').parse::<f64>().unwrap();
        let secs = |prop: &str| style(&card, prop).trim_end_matches('s').parse::<f64>().unwrap();
        assert!((10.0..=90.0).contains(&pct("left")));
        assert!((10.0..=90.0).contains(&pct("top")));
        assert!((0.0..20.0).contains(&secs("animation-delay")));
        assert!((15.0..25.0).contains(&secs("animation-duration")));
    }
    root.remove();
}

fn cancelable_click() -> Event {
    let init = EventInit::new();
    init.set_cancelable(true);
    Event::new_with_event_init_dict("click", &init).unwrap()
}

#[wasm_bindgen_test]
fn fragment_links_suppress_navigation_even_without_target() {
    let root = fixture(r##"
        <a id="to-target" href="#scroll-target">go</a>
        <a id="to-nowhere" href="#does-not-exist">stale</a>
        <div id="scroll-target"></div>
    "##);
    smooth_scroll::init_smooth_scrolling().unwrap();

    assert!(!by_id("to-target").dispatch_event(&cancelable_click()).unwrap());
    assert!(!by_id("to-nowhere").dispatch_event(&cancelable_click()).unwrap());
    root.remove();
}

#[wasm_bindgen_test]
fn category_selection_is_exclusive() {
    let root = fixture(r#"
        <div id="c0" class="category active"></div>
        <div id="c1" class="category"></div>
        <div id="c2" class="category"></div>
    "#);
    interactions::init_interactions().unwrap();

    for clicked in ["c2", "c1", "c1", "c0"] {
        by_id(clicked).click();
        for id in ["c0", "c1", "c2"] {
            assert_eq!(is_active(&by_id(id)), id == clicked, "after clicking {}", clicked);
        }
    }
    root.remove();
}

#[wasm_bindgen_test]
async fn card_press_settles_after_delay() {
    let root = fixture(r#"<div id="ext" class="extension-card"></div>"#);
    interactions::init_interactions().unwrap();

    let card = by_id("ext");
    card.click();
    assert_eq!(style(&card, "transform"), "scale(0.95)");
    TimeoutFuture::new(100).await;
    // A second press restarts the release.
    card.click();
    TimeoutFuture::new(100).await;
    assert_eq!(style(&card, "transform"), "scale(0.95)");
    TimeoutFuture::new(150).await;
    assert_eq!(style(&card, "transform"), "translateY(-4px)");
    root.remove();
}

#[wasm_bindgen_test]
fn sections_start_hidden_with_transition() {
    let root = fixture(r#"<section id="s1"></section>"#);
    reveal::init_animations().unwrap();

    let section = by_id("s1");
    assert_eq!(style(&section, "opacity"), "0");
    assert_eq!(style(&section, "transform"), "translateY(30px)");
    assert!(style(&section, "transition").contains("opacity 0.8s"));
    root.remove();
}

#[wasm_bindgen_test]
fn loaded_state_is_set_once() {
    bootstrap::mark_loaded().unwrap();
    bootstrap::mark_loaded().unwrap();
    assert!(bootstrap::is_ready());
    assert!(document().body().unwrap().class_list().contains("loaded"));
}

#[wasm_bindgen_test]
fn controls_respond_to_plain_click_events() {
    let root = fixture(&format!(
        r#"{}<div id="p0" class="category active"></div><div id="p1" class="category"></div>"#,
        THEME_MARKUP
    ));
    let store = Rc::new(MemoryStore::new());
    theme::init_theme_toggle(store.clone()).unwrap();
    interactions::init_interactions().unwrap();

    let click = || Event::new("click").unwrap();
    by_id("t-auto").dispatch_event(&click()).unwrap();
    assert_eq!(store.get("theme").as_deref(), Some("auto"));
    assert!(is_active(&by_id("t-auto")));
    assert!(!is_active(&by_id("t-dark")));

    by_id("p1").dispatch_event(&click()).unwrap();
    assert!(is_active(&by_id("p1")));
    assert!(!is_active(&by_id("p0")));
    root.remove();
}

#[wasm_bindgen_test]
fn corrupted_theme_is_repaired_on_load() {
    let root = fixture(THEME_MARKUP);
    let store = Rc::new(MemoryStore::new());
    store.set("theme", "neon");
    theme::init_theme_toggle(store.clone()).unwrap();

    assert!(is_active(&by_id("t-dark")));
    assert_eq!(store.get("theme").as_deref(), Some("dark"));
    root.remove();
}

#[wasm_bindgen_test]
async fn scroll_indicator_hides_past_half_the_viewport() {
    let root = fixture(&format!(r#"<div id="ind" class="scroll-indicator"></div>{}"#, SPACER));
    scroll_to(0.0);
    scroll_indicator::init_scroll_indicator().unwrap();

    let indicator = by_id("ind");
    assert_eq!(style(&indicator, "opacity"), "1");
    assert_eq!(style(&indicator, "pointer-events"), "auto");

    scroll_to(viewport_height() * 0.5 + 200.0);
    TimeoutFuture::new(100).await;
    assert_eq!(style(&indicator, "opacity"), "0");
    assert_eq!(style(&indicator, "pointer-events"), "none");

    scroll_to(0.0);
    TimeoutFuture::new(100).await;
    assert_eq!(style(&indicator, "opacity"), "1");
    root.remove();
}

fn is_settled(section: &HtmlElement) -> bool {
    matches!(style(section, "transform").as_str(), "translateY(0)" | "translateY(0px)")
}

#[wasm_bindgen_test]
async fn sections_reveal_once_and_stay_revealed() {
    let root = fixture(&format!(
        r#"{spacer}<section id="late" style="height: 300px"></section>{spacer}"#,
        spacer = SPACER
    ));
    scroll_to(0.0);
    reveal::init_animations().unwrap();
    TimeoutFuture::new(200).await;

    let section = by_id("late");
    assert_eq!(style(&section, "opacity"), "0");

    section.scroll_into_view();
    TimeoutFuture::new(300).await;
    assert_eq!(style(&section, "opacity"), "1");
    assert!(is_settled(&section));

    scroll_to(0.0);
    TimeoutFuture::new(300).await;
    assert_eq!(style(&section, "opacity"), "1");
    assert!(is_settled(&section));
    root.remove();
}

#[wasm_bindgen_test]
async fn hero_content_moves_at_half_scroll_distance() {
    let root = fixture(&format!(
        r#"<div class="hero"><div id="hero-inner" class="hero-content"></div></div>{}"#,
        SPACER
    ));
    scroll_to(0.0);
    reveal::init_animations().unwrap();

    scroll_to(200.0);
    TimeoutFuture::new(200).await;
    assert_eq!(scroll_y(), 200.0);
    assert_eq!(style(&by_id("hero-inner"), "transform"), "translateY(100px)");
    scroll_to(0.0);
    root.remove();
}

#[wasm_bindgen_test]
async fn fragment_link_scrolls_to_its_target() {
    let root = fixture(&format!(
        r##"<a id="jump" href="#far-target">go</a>{}<div id="far-target"></div>"##,
        SPACER
    ));
    scroll_to(0.0);
    smooth_scroll::init_smooth_scrolling().unwrap();

    by_id("jump").click();
    TimeoutFuture::new(1500).await;
    assert!(scroll_y() > 1000.0, "scrolled to {}", scroll_y());
    scroll_to(0.0);
    root.remove();
}

#[wasm_bindgen_test]
fn inline_accept_cookies_reaches_the_session_store() {
    let store = Rc::new(MemoryStore::new());
    set_session_store(store.clone());
    consent::expose_accept_cookies().unwrap();
    let root = fixture(BANNER_MARKUP);

    let global = js_sys::Reflect::get(&window().unwrap(), &JsValue::from_str("acceptCookies"))
        .unwrap()
        .dyn_into::<js_sys::Function>()
        .unwrap();
    global.call0(&JsValue::NULL).unwrap();

    assert_eq!(style(&by_id("cookieBanner"), "display"), "none");
    assert_eq!(store.get("cookiesAccepted").as_deref(), Some("true"));
    root.remove();
}

#[wasm_bindgen_test]
fn fresh_page_boots_into_its_default_state() {
    let store = Rc::new(MemoryStore::new());
    set_session_store(store.clone());
    let root = fixture(&format!(
        r#"
        <button id="t-dark" class="theme-btn" data-theme="dark"></button>
        <button id="t-light" class="theme-btn" data-theme="light"></button>
        <div id="cookieBanner"><button data-action="accept-cookies"></button></div>
        <div id="ind" class="scroll-indicator"></div>
        <div id="floatingCards"></div>
        <section></section>
        {}
        "#,
        SPACER
    ));
    scroll_to(0.0);
    bootstrap::run().unwrap();

    let html = document().document_element().unwrap();
    assert_eq!(html.get_attribute("data-theme").as_deref(), Some("dark"));
    assert!(is_active(&by_id("t-dark")));
    assert!(!is_active(&by_id("t-light")));
    assert_eq!(style(&by_id("cookieBanner"), "display"), "");
    assert_eq!(style(&by_id("ind"), "opacity"), "1");
    assert_eq!(by_id("floatingCards").query_selector_all(".floating-card").unwrap().length(), 12);

    by_id("t-light").click();
    assert_eq!(html.get_attribute("data-theme").as_deref(), Some("light"));
    assert_eq!(store.get("theme").as_deref(), Some("light"));
    assert!(is_active(&by_id("t-light")));
    assert!(!is_active(&by_id("t-dark")));
    root.remove();
}

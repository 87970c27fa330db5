use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose output while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Persisted keys
pub const THEME_KEY: &str = "theme";
pub const COOKIES_ACCEPTED_KEY: &str = "cookiesAccepted";
pub const COOKIES_ACCEPTED_VALUE: &str = "true";

// Markup contract
pub const THEME_ATTRIBUTE: &str = "data-theme";
pub const THEME_BUTTON_SELECTOR: &str = ".theme-btn";
pub const FLOATING_CARDS_ID: &str = "floatingCards";
pub const FLOATING_CARD_CLASS: &str = "floating-card";
pub const SCROLL_INDICATOR_SELECTOR: &str = ".scroll-indicator";
pub const COOKIE_BANNER_ID: &str = "cookieBanner";
pub const COOKIE_ACCEPT_SELECTOR: &str = "[data-action=\"accept-cookies\"]";
pub const FRAGMENT_LINK_SELECTOR: &str = "a[href^=\"#\"]";
pub const SECTION_SELECTOR: &str = "section";
pub const HERO_SELECTOR: &str = ".hero";
pub const HERO_CONTENT_SELECTOR: &str = ".hero-content";
pub const BUTTON_SELECTOR: &str = ".btn";
pub const CATEGORY_SELECTOR: &str = ".category";
pub const EXTENSION_CARD_SELECTOR: &str = ".extension-card";
pub const CLUSTER_CARD_SELECTOR: &str = ".cluster-card";
pub const ACTIVE_CLASS: &str = "active";
pub const LOADED_CLASS: &str = "loaded";

// Floating cards
pub const FLOATING_CARD_COUNT: usize = 12;
pub const FLOATING_CARD_ALT: &str = "Floating inspiration card";
pub const FLOATING_CARD_IMAGES: [&str; 3] = [
    "https://images.unsplash.com/photo-1506905925346-21bda4d32df4?w=120&h=160&fit=crop",
    "https://images.unsplash.com/photo-1441986300917-64674bd600d8?w=120&h=160&fit=crop",
    "https://images.unsplash.com/photo-1551698618-1dfe5d97d256?w=120&h=160&fit=crop",
];
pub const CARD_POSITION_MIN_PCT: f64 = 10.0;
pub const CARD_POSITION_SPAN_PCT: f64 = 80.0;
pub const CARD_DELAY_MAX_S: f64 = 20.0;
pub const CARD_DURATION_MIN_S: f64 = 15.0;
pub const CARD_DURATION_SPAN_S: f64 = 10.0;
pub const PARALLAX_AMPLITUDE_PX: f64 = 20.0;
pub const PARALLAX_BASE_SPEED: f64 = 0.5;
pub const PARALLAX_SPEED_STEP: f64 = 0.1;
pub const PARALLAX_ROTATION_FACTOR: f64 = 0.5;

// Reveal on scroll
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_OFFSET_PX: u32 = 30;
pub const REVEAL_TRANSITION: &str = "opacity 0.8s ease, transform 0.8s ease";
pub const HERO_PARALLAX_FACTOR: f64 = 0.5;

// Timing
pub const PRESS_RELEASE_DELAY_MS: u32 = 150;
pub const SCROLL_DEBOUNCE_MS: u32 = 16; // ~60fps

use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use log::{info, warn};
use web_sys::{Document, Event, HtmlElement};

use crate::config;
use crate::dom;
use crate::error::SetupError;
use crate::storage::KeyValueStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
    Auto,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Dark, Theme::Light, Theme::Auto];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
            Theme::Auto => "auto",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Theme::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| UnknownTheme(s.to_string()))
    }
}

/// Persisted theme choice.
pub struct ThemeStore<S> {
    store: S,
}

impl<S: KeyValueStore> ThemeStore<S> {
    pub fn new(store: S) -> Self {
        ThemeStore { store }
    }

    /// The persisted theme, or the default when nothing valid is stored.
    pub fn get_theme(&self) -> Theme {
        match self.store.get(config::THEME_KEY) {
            None => Theme::default(),
            Some(raw) => raw.parse().unwrap_or_else(|UnknownTheme(bad)| {
                warn!("Ignoring unknown persisted theme {:?}", bad);
                Theme::default()
            }),
        }
    }

    /// Like `get_theme`, but a stored value that does not parse is replaced
    /// by the default so storage agrees with what is shown.
    pub fn restore(&self) -> Theme {
        let theme = self.get_theme();
        let stored = self.store.get(config::THEME_KEY);
        if stored.is_some_and(|raw| raw != theme.as_str()) {
            self.set_theme(theme);
        }
        theme
    }

    pub fn set_theme(&self, theme: Theme) {
        self.store.set(config::THEME_KEY, theme.as_str());
    }
}

/// For each control tag, whether it is the active one. Controls with the
/// same tag as `active` are all selected; everything else is cleared.
pub fn active_flags<'a, I>(control_tags: I, active: Theme) -> Vec<bool>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    control_tags
        .into_iter()
        .map(|tag| tag == Some(active.as_str()))
        .collect()
}

fn apply_theme(document: &Document, buttons: &[HtmlElement], theme: Theme) {
    if let Some(root) = document.document_element() {
        if let Err(e) = root.set_attribute(config::THEME_ATTRIBUTE, theme.as_str()) {
            warn!("Failed to set document theme: {:?}", e);
        }
    }
    let tags: Vec<Option<String>> = buttons
        .iter()
        .map(|b| b.get_attribute(config::THEME_ATTRIBUTE))
        .collect();
    let flags = active_flags(tags.iter().map(|t| t.as_deref()), theme);
    for (button, active) in buttons.iter().zip(flags) {
        dom::set_class(button, config::ACTIVE_CLASS, active);
    }
}

pub fn init_theme_toggle<S>(store: S) -> Result<(), SetupError>
where
    S: KeyValueStore + 'static,
{
    let document = dom::document()?;
    let themes = Rc::new(ThemeStore::new(store));
    let buttons = Rc::new(dom::query_all(&document, config::THEME_BUTTON_SELECTOR)?);

    let current = themes.restore();
    apply_theme(&document, &buttons, current);
    info!("Theme initialized to {}", current);

    for button in buttons.iter() {
        let themes = themes.clone();
        let buttons = buttons.clone();
        let document = document.clone();
        let control = button.clone();
        dom::listen(button, "click", move |_: Event| {
            let Some(tag) = control.get_attribute(config::THEME_ATTRIBUTE) else {
                return;
            };
            match tag.parse::<Theme>() {
                Ok(theme) => {
                    apply_theme(&document, &buttons, theme);
                    themes.set_theme(theme);
                    info!("Theme switched to {}", theme);
                }
                Err(UnknownTheme(bad)) => warn!("Theme control declares unknown theme {:?}", bad),
            }
        })?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn unset_theme_defaults_to_dark() {
        let themes = ThemeStore::new(MemoryStore::new());
        assert_eq!(themes.get_theme(), Theme::Dark);
    }

    #[test]
    fn stored_theme_survives_a_fresh_store_handle() {
        let backing = Rc::new(MemoryStore::new());
        ThemeStore::new(backing.clone()).set_theme(Theme::Light);
        assert_eq!(backing.get("theme").as_deref(), Some("light"));
        assert_eq!(ThemeStore::new(backing).get_theme(), Theme::Light);
    }

    #[test]
    fn corrupted_theme_falls_back_to_default() {
        let backing = MemoryStore::new();
        backing.set("theme", "neon");
        assert_eq!(ThemeStore::new(backing).get_theme(), Theme::Dark);
    }

    #[test]
    fn restoring_a_corrupted_theme_rewrites_storage() {
        let backing = Rc::new(MemoryStore::new());
        backing.set("theme", "neon");
        assert_eq!(ThemeStore::new(backing.clone()).restore(), Theme::Dark);
        assert_eq!(backing.get("theme").as_deref(), Some("dark"));
    }

    #[test]
    fn restoring_leaves_valid_or_missing_values_alone() {
        let backing = Rc::new(MemoryStore::new());
        assert_eq!(ThemeStore::new(backing.clone()).restore(), Theme::Dark);
        assert_eq!(backing.get("theme"), None);
        backing.set("theme", "auto");
        assert_eq!(ThemeStore::new(backing.clone()).restore(), Theme::Auto);
        assert_eq!(backing.get("theme").as_deref(), Some("auto"));
    }

    #[test]
    fn exactly_the_matching_control_is_active() {
        let tags = [Some("dark"), Some("light"), None, Some("auto")];
        for theme in Theme::ALL {
            let flags = active_flags(tags, theme);
            assert_eq!(flags.iter().filter(|active| **active).count(), 1, "{}", theme);
        }
        assert_eq!(active_flags(tags, Theme::Light), vec![false, true, false, false]);
    }
}

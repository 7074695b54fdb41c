//! Light/dark theme: the persisted preference, the controller that owns it,
//! and the Yew context that hands it to the page.
//!
//! The preference is loaded once before anything renders: a stored value
//! wins, then the OS colour scheme, then [`Theme::Light`]. Only an explicit
//! toggle writes it back.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::str::FromStr;

use log::{info, warn};
use serde::{Deserialize, Serialize};
use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

use crate::browser::{self, BrowserStore};
use crate::config;
use crate::error::{StorageError, ThemeParseError};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn flipped(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = ThemeParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(ThemeParseError(other.to_string())),
        }
    }
}

/// Key-value storage for the theme preference.
pub trait PreferenceStore {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

pub struct ThemeController<S: PreferenceStore> {
    store: S,
    current: Theme,
}

impl<S: PreferenceStore> ThemeController<S> {
    pub fn load(store: S, platform: Option<Theme>) -> Self {
        let stored = store
            .read(config::THEME_STORAGE_KEY)
            .and_then(|raw| match raw.parse::<Theme>() {
                Ok(theme) => Some(theme),
                Err(e) => {
                    warn!("Ignoring stored theme: {}", e);
                    None
                }
            });

        let current = match (stored, platform) {
            (Some(theme), _) => {
                info!("Theme {} loaded from storage", theme);
                theme
            }
            (None, Some(theme)) => {
                info!("Theme {} taken from platform colour scheme", theme);
                theme
            }
            (None, None) => Theme::default(),
        };

        Self { store, current }
    }

    pub fn current(&self) -> Theme {
        self.current
    }

    /// Flips the theme and persists it. A storage failure only means the
    /// choice won't survive a reload.
    pub fn toggle(&mut self) -> Theme {
        self.current = self.current.flipped();
        if let Err(e) = self.store.write(config::THEME_STORAGE_KEY, self.current.as_str()) {
            warn!("Theme preference not saved: {}", e);
        }
        info!("Theme toggled to {}", self.current);
        self.current
    }
}

#[derive(Clone, PartialEq)]
pub struct ThemeContext {
    pub theme: Theme,
    pub toggle: Callback<()>,
}

/// The context's single mutation entry point: flips `controller` and hands
/// the new theme to `on_change`.
pub fn toggle_callback<S: PreferenceStore + 'static>(
    controller: Rc<RefCell<ThemeController<S>>>,
    on_change: impl Fn(Theme) + 'static,
) -> Callback<()> {
    Callback::from(move |_: ()| {
        let next = controller.borrow_mut().toggle();
        on_change(next);
    })
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let controller = use_mut_ref(|| {
        let controller = ThemeController::load(BrowserStore, browser::platform_color_scheme());
        browser::apply_theme_marker(controller.current());
        controller
    });
    let theme = use_state(|| controller.borrow().current());

    // Built once so consumers comparing the context only see theme changes.
    let toggle = {
        let controller = controller.clone();
        let setter = theme.setter();
        use_memo(
            move |_| {
                toggle_callback(controller, move |next| {
                    browser::apply_theme_marker(next);
                    setter.set(next);
                })
            },
            (),
        )
    };

    let context = ThemeContext {
        theme: *theme,
        toggle: (*toggle).clone(),
    };

    html! {
        <ContextProvider<ThemeContext> context={context}>
            <ThemeStyles />
            { for props.children.iter() }
        </ContextProvider<ThemeContext>>
    }
}

#[hook]
pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().unwrap_or_else(|| {
        warn!("use_theme called outside ThemeProvider, falling back to light");
        ThemeContext {
            theme: Theme::default(),
            toggle: Callback::noop(),
        }
    })
}

/// Colour tokens for both themes, selected by the `data-theme` marker.
#[function_component(ThemeStyles)]
pub fn theme_styles() -> Html {
    html! {
        <Global css={css!(r#"
            html[data-theme="light"] {
                --bg: #f7f8fb;
                --bg-elevated: #ffffff;
                --bg-muted: #eef1f7;
                --text: #141824;
                --text-muted: #5a6275;
                --accent: #3b5bfd;
                --accent-contrast: #ffffff;
                --border: rgba(20, 24, 36, 0.1);
                --shadow: 0 10px 30px rgba(20, 24, 36, 0.08);
            }

            html[data-theme="dark"] {
                --bg: #0d0f16;
                --bg-elevated: #161a24;
                --bg-muted: #1c2130;
                --text: #f1f3f8;
                --text-muted: #9aa3b8;
                --accent: #7b93ff;
                --accent-contrast: #0d0f16;
                --border: rgba(241, 243, 248, 0.1);
                --shadow: 0 10px 30px rgba(0, 0, 0, 0.4);
            }

            html {
                scroll-behavior: smooth;
            }

            body {
                margin: 0;
                background: var(--bg);
                color: var(--text);
                font-family: "Inter", -apple-system, "Segoe UI", Roboto, sans-serif;
                transition: background-color 0.3s ease, color 0.3s ease;
            }

            a {
                color: inherit;
            }

            .reveal {
                opacity: 0;
                transform: translateY(24px);
                transition: opacity 0.6s ease, transform 0.6s ease;
            }

            .reveal.visible {
                opacity: 1;
                transform: none;
            }

            @media (prefers-reduced-motion: reduce) {
                .reveal {
                    opacity: 1;
                    transform: none;
                    transition: none;
                }
            }
        "#)} />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[derive(Clone, Default)]
    struct MemoryStore {
        values: Rc<RefCell<HashMap<String, String>>>,
    }

    impl MemoryStore {
        fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store.values.borrow_mut().insert(key.to_string(), value.to_string());
            store
        }

        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }
    }

    impl PreferenceStore for MemoryStore {
        fn read(&self, key: &str) -> Option<String> {
            self.get(key)
        }

        fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
            self.values.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    struct UnavailableStore;

    impl PreferenceStore for UnavailableStore {
        fn read(&self, _key: &str) -> Option<String> {
            None
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    const KEY: &str = config::THEME_STORAGE_KEY;

    #[test]
    fn platform_dark_used_without_stored_value() {
        let controller = ThemeController::load(MemoryStore::default(), Some(Theme::Dark));
        assert_eq!(controller.current(), Theme::Dark);
    }

    #[test]
    fn defaults_to_light_without_any_signal() {
        let controller = ThemeController::load(MemoryStore::default(), None);
        assert_eq!(controller.current(), Theme::Light);
    }

    #[test]
    fn stored_value_beats_platform() {
        let controller = ThemeController::load(MemoryStore::with(KEY, "light"), Some(Theme::Dark));
        assert_eq!(controller.current(), Theme::Light);
    }

    #[test]
    fn garbage_stored_value_is_ignored() {
        let controller = ThemeController::load(MemoryStore::with(KEY, "sepia"), Some(Theme::Dark));
        assert_eq!(controller.current(), Theme::Dark);
    }

    #[test]
    fn loading_does_not_persist() {
        let store = MemoryStore::default();
        let _controller = ThemeController::load(store.clone(), Some(Theme::Dark));
        assert_eq!(store.get(KEY), None);
    }

    #[test]
    fn toggle_flips_and_persists() {
        let store = MemoryStore::default();
        let mut controller = ThemeController::load(store.clone(), None);
        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(controller.current(), Theme::Dark);
        assert_eq!(store.get(KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn double_toggle_restores_value_and_stored_value() {
        let store = MemoryStore::with(KEY, "dark");
        let mut controller = ThemeController::load(store.clone(), None);
        let original = controller.current();

        controller.toggle();
        controller.toggle();

        assert_eq!(controller.current(), original);
        assert_eq!(store.get(KEY).as_deref(), Some("dark"));
    }

    #[test]
    fn toggle_survives_unavailable_storage() {
        let mut controller = ThemeController::load(UnavailableStore, None);
        assert_eq!(controller.toggle(), Theme::Dark);
        assert_eq!(controller.toggle(), Theme::Light);
    }

    #[test]
    fn toggle_callback_flips_persists_and_reports() {
        let store = MemoryStore::default();
        let controller = Rc::new(RefCell::new(ThemeController::load(store.clone(), None)));
        let seen = Rc::new(RefCell::new(Vec::new()));
        let toggle = {
            let seen = seen.clone();
            toggle_callback(controller.clone(), move |theme| seen.borrow_mut().push(theme))
        };

        toggle.emit(());
        assert_eq!(store.get(KEY).as_deref(), Some("dark"));
        toggle.emit(());

        assert_eq!(*seen.borrow(), vec![Theme::Dark, Theme::Light]);
        assert_eq!(controller.borrow().current(), Theme::Light);
        assert_eq!(store.get(KEY).as_deref(), Some("light"));
    }

    #[test]
    fn context_equality_tracks_theme_not_rerenders() {
        let controller = Rc::new(RefCell::new(ThemeController::load(MemoryStore::default(), None)));
        let toggle = toggle_callback(controller.clone(), |_| ());
        let render = |theme| ThemeContext {
            theme,
            toggle: toggle.clone(),
        };

        assert!(render(Theme::Light) == render(Theme::Light));
        assert!(render(Theme::Light) != render(Theme::Dark));

        let rebuilt = ThemeContext {
            theme: Theme::Light,
            toggle: toggle_callback(controller, |_| ()),
        };
        assert!(render(Theme::Light) != rebuilt);
    }

    #[test]
    fn string_forms_match_serde() {
        for theme in [Theme::Light, Theme::Dark] {
            let json = serde_json::to_string(&theme).unwrap();
            assert_eq!(json, format!("\"{}\"", theme.as_str()));
            assert_eq!(theme.as_str().parse::<Theme>(), Ok(theme));
        }
        assert!("Dark".parse::<Theme>().is_err());
    }
}

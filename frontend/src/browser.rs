// Thin wrappers over the browser APIs the theme controller depends on.

use log::debug;
use web_sys::{window, Storage};

use crate::error::StorageError;
use crate::theme::{PreferenceStore, Theme};

/// `window.localStorage`, looked up on every call so a storage that becomes
/// unavailable (private mode, quota) degrades instead of failing.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStore;

impl BrowserStore {
    fn storage() -> Option<Storage> {
        window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

impl PreferenceStore for BrowserStore {
    fn read(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = Self::storage().ok_or(StorageError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Rejected(format!("{:?}", e)))
    }
}

/// The OS colour-scheme preference, or `None` when `matchMedia` isn't there.
pub fn platform_color_scheme() -> Option<Theme> {
    let query = window()?
        .match_media("(prefers-color-scheme: dark)")
        .ok()
        .flatten()?;
    Some(if query.matches() { Theme::Dark } else { Theme::Light })
}

/// Sets `data-theme` on `<html>`; the global stylesheet keys its colours on it.
pub fn apply_theme_marker(theme: Theme) {
    let root = window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    match root {
        Some(root) => {
            if let Err(e) = root.set_attribute("data-theme", theme.as_str()) {
                debug!("Could not set data-theme: {:?}", e);
            }
        }
        None => debug!("No document element to mark with theme {}", theme),
    }
}

#[cfg(test)]
mod tests {
    use crate::config;

    const INDEX_HTML: &str = include_str!("../index.html");

    #[test]
    fn index_marks_theme_before_first_paint() {
        let head = &INDEX_HTML[..INDEX_HTML.find("</head>").unwrap()];
        assert!(!INDEX_HTML.contains("data-theme=\"light\""), "static theme would flash");
        assert!(head.contains(&format!("localStorage.getItem(\"{}\")", config::THEME_STORAGE_KEY)));
        assert!(head.contains("(prefers-color-scheme: dark)"));
        assert!(head.contains("setAttribute(\"data-theme\""));
    }
}

use log::Level;

/// localStorage key holding the persisted theme ("light" or "dark").
pub const THEME_STORAGE_KEY: &str = "theme";

/// Header switches to its solid background once the page is scrolled past this.
pub const SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Fake round trip before the contact form shows its confirmation.
pub const CTA_CONFIRM_DELAY_MS: u32 = 1000;

pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
pub const REVEAL_STAGGER_MS: u32 = 100;

pub const CONTACT_EMAIL: &str = "hello@northwind-automation.com";

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

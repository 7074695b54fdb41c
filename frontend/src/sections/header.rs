use std::rc::Rc;

use log::debug;
use web_sys::{window, Event, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_event_with_window;

use crate::config;
use crate::content::{BRAND, NAV_ITEMS};
use crate::theme::{use_theme, Theme};

pub fn is_scrolled(offset: f64) -> bool {
    offset > config::SCROLL_THRESHOLD_PX
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NavState {
    pub scrolled: bool,
    pub menu_open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum NavAction {
    Scrolled(f64),
    ToggleMenu,
    CloseMenu,
}

impl Reducible for NavState {
    type Action = NavAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let next = match action {
            NavAction::Scrolled(offset) => NavState {
                scrolled: is_scrolled(offset),
                ..(*self).clone()
            },
            NavAction::ToggleMenu => NavState {
                menu_open: !self.menu_open,
                ..(*self).clone()
            },
            NavAction::CloseMenu => NavState {
                menu_open: false,
                ..(*self).clone()
            },
        };

        // Scroll fires constantly; keep the same Rc when nothing changed.
        if next == *self {
            self
        } else {
            Rc::new(next)
        }
    }
}

const HEADER_CSS: &str = r#"
    .site-header {
        position: fixed;
        top: 0;
        left: 0;
        right: 0;
        z-index: 100;
        transition: box-shadow 0.3s ease;
    }

    /* A filter on the header itself would trap the fixed mobile overlay inside it. */
    .site-header::before {
        content: "";
        position: absolute;
        inset: 0;
        z-index: -1;
        opacity: 0;
        background: color-mix(in srgb, var(--bg-elevated) 85%, transparent);
        backdrop-filter: blur(12px);
        transition: opacity 0.3s ease;
        pointer-events: none;
    }

    .site-header.scrolled {
        box-shadow: 0 1px 0 var(--border);
    }

    .site-header.scrolled::before {
        opacity: 1;
    }

    .header-inner {
        max-width: 1200px;
        margin: 0 auto;
        padding: 1rem 1.5rem;
        display: flex;
        align-items: center;
        gap: 2rem;
    }

    .brand {
        display: flex;
        align-items: center;
        gap: 0.5rem;
        font-weight: 700;
        font-size: 1.15rem;
        text-decoration: none;
    }

    .brand-mark {
        color: var(--accent);
    }

    .nav-links {
        display: flex;
        align-items: center;
        gap: 1.75rem;
        margin-left: auto;
    }

    .nav-link {
        text-decoration: none;
        color: var(--text-muted);
        transition: color 0.2s ease;
    }

    .nav-link:hover {
        color: var(--text);
    }

    .nav-cta {
        text-decoration: none;
        background: var(--accent);
        color: var(--accent-contrast);
        padding: 0.55rem 1.1rem;
        border-radius: 999px;
        font-weight: 600;
    }

    .header-actions {
        display: flex;
        align-items: center;
        gap: 0.75rem;
    }

    .theme-toggle {
        background: var(--bg-muted);
        border: 1px solid var(--border);
        color: var(--text);
        width: 2.25rem;
        height: 2.25rem;
        border-radius: 50%;
        cursor: pointer;
        font-size: 1rem;
    }

    .burger-menu {
        display: none;
        flex-direction: column;
        justify-content: space-between;
        width: 1.6rem;
        height: 1.1rem;
        background: none;
        border: none;
        padding: 0;
        cursor: pointer;
    }

    .burger-menu span {
        display: block;
        height: 2px;
        background: var(--text);
        border-radius: 2px;
        transition: transform 0.3s ease, opacity 0.3s ease;
    }

    .burger-menu.open span:nth-child(1) {
        transform: translateY(8px) rotate(45deg);
    }

    .burger-menu.open span:nth-child(2) {
        opacity: 0;
    }

    .burger-menu.open span:nth-child(3) {
        transform: translateY(-8px) rotate(-45deg);
    }

    @media (max-width: 860px) {
        .burger-menu {
            display: flex;
        }

        .header-actions {
            margin-left: auto;
        }

        .nav-links {
            position: fixed;
            inset: 0;
            flex-direction: column;
            justify-content: center;
            gap: 2rem;
            font-size: 1.4rem;
            background: var(--bg);
            opacity: 0;
            pointer-events: none;
            transition: opacity 0.3s ease;
            margin: 0;
            z-index: -1;
        }

        .nav-links.open {
            opacity: 1;
            pointer-events: auto;
        }
    }
    "#;

fn scroll_offset() -> f64 {
    window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
}

#[function_component(ThemeToggle)]
fn theme_toggle() -> Html {
    let theme = use_theme();
    let (icon, label) = match theme.theme {
        Theme::Light => ("☾", "Switch to dark theme"),
        Theme::Dark => ("☀", "Switch to light theme"),
    };
    let onclick = {
        let toggle = theme.toggle.clone();
        Callback::from(move |_: MouseEvent| toggle.emit(()))
    };

    html! {
        <button class="theme-toggle" aria-label={label} title={label} {onclick}>
            {icon}
        </button>
    }
}

#[function_component(Header)]
pub fn header() -> Html {
    let nav = use_reducer(NavState::default);

    // Page may load already scrolled (reload, deep link).
    {
        let nav = nav.dispatcher();
        use_effect_with_deps(
            move |_| {
                nav.dispatch(NavAction::Scrolled(scroll_offset()));
                || ()
            },
            (),
        );
    }

    {
        let nav = nav.dispatcher();
        use_event_with_window("scroll", move |_: Event| {
            nav.dispatch(NavAction::Scrolled(scroll_offset()));
        });
    }

    let toggle_menu = {
        let nav = nav.dispatcher();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            debug!("Mobile menu toggled");
            nav.dispatch(NavAction::ToggleMenu);
        })
    };

    let close_menu = {
        let nav = nav.dispatcher();
        Callback::from(move |_: MouseEvent| nav.dispatch(NavAction::CloseMenu))
    };

    html! {
        <header class={classes!("site-header", nav.scrolled.then_some("scrolled"))}>
            <div class="header-inner">
                <a href="#home" class="brand" onclick={close_menu.clone()}>
                    <span class="brand-mark">{"◆"}</span>
                    {BRAND}
                </a>

                <nav class={classes!("nav-links", nav.menu_open.then_some("open"))}>
                    { for NAV_ITEMS.iter().map(|item| html! {
                        <a href={item.href} class="nav-link" onclick={close_menu.clone()}>
                            {item.label}
                        </a>
                    }) }
                    <a href="#contact" class="nav-cta" onclick={close_menu.clone()}>
                        {"Book a call"}
                    </a>
                </nav>

                <div class="header-actions">
                    <ThemeToggle />
                    <button
                        class={classes!("burger-menu", nav.menu_open.then_some("open"))}
                        aria-label="Toggle navigation"
                        aria-expanded={nav.menu_open.to_string()}
                        onclick={toggle_menu}
                    >
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>
            <style>{HEADER_CSS}</style>
        </header>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce(state: NavState, action: NavAction) -> NavState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn scrolled_is_strictly_above_threshold() {
        let t = config::SCROLL_THRESHOLD_PX;
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(t - 1.0));
        assert!(!is_scrolled(t));
        assert!(is_scrolled(t + 1.0));
        assert!(is_scrolled(t * 50.0));
    }

    #[test]
    fn scroll_action_tracks_both_sides_of_threshold() {
        let t = config::SCROLL_THRESHOLD_PX;
        let down = reduce(NavState::default(), NavAction::Scrolled(t + 0.5));
        assert!(down.scrolled);
        let up = reduce(down, NavAction::Scrolled(t - 0.5));
        assert!(!up.scrolled);
    }

    #[test]
    fn menu_toggles_and_closes() {
        let open = reduce(NavState::default(), NavAction::ToggleMenu);
        assert!(open.menu_open);
        assert!(!reduce(open.clone(), NavAction::ToggleMenu).menu_open);
        assert!(!reduce(open, NavAction::CloseMenu).menu_open);
        assert!(!reduce(NavState::default(), NavAction::CloseMenu).menu_open);
    }

    #[test]
    fn scrolling_keeps_menu_state() {
        let open = reduce(NavState::default(), NavAction::ToggleMenu);
        let scrolled = reduce(open, NavAction::Scrolled(500.0));
        assert!(scrolled.menu_open);
        assert!(scrolled.scrolled);
    }

    fn css_rule<'a>(css: &'a str, selector: &str) -> &'a str {
        // Last match, so media-query overrides win over the base rule.
        let start = css
            .rfind(&format!("{} {{", selector))
            .unwrap_or_else(|| panic!("no rule for {}", selector));
        let body = &css[start..];
        &body[..body.find('}').unwrap()]
    }

    #[test]
    fn header_box_never_traps_the_fixed_menu_overlay() {
        // backdrop-filter/filter/transform on an ancestor make it the
        // containing block for `position: fixed` descendants.
        for selector in [".site-header", ".site-header.scrolled"] {
            let rule = css_rule(HEADER_CSS, selector);
            for property in ["backdrop-filter", "filter:", "transform"] {
                assert!(!rule.contains(property), "{} sets {}", selector, property);
            }
        }
        assert!(css_rule(HEADER_CSS, ".site-header::before").contains("backdrop-filter"));
        assert!(css_rule(HEADER_CSS, ".nav-links").contains("inset: 0"));
    }

    #[test]
    fn unchanged_state_reuses_rc() {
        let state = Rc::new(NavState::default());
        let next = state.clone().reduce(NavAction::Scrolled(0.0));
        assert!(Rc::ptr_eq(&state, &next));
    }
}

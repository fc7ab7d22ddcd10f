//! Viewport-width breakpoints and the layout they select.

use crate::MenuState;
use leptos::{ev, prelude::*};

/// Width thresholds, in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Breakpoints {
    /// Below this the header collapses into the hamburger menu.
    pub mobile: u32,
    /// Below this the in-page anchor link is dropped from the bar.
    pub compact: u32,
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self {
            mobile: 768,
            compact: 835,
        }
    }
}

impl Breakpoints {
    pub fn classify(&self, width: f64) -> Viewport {
        Viewport {
            below_mobile: is_below(width, self.mobile),
            below_compact: is_below(width, self.compact),
        }
    }
}

/// Which breakpoints the current viewport falls under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    pub below_mobile: bool,
    pub below_compact: bool,
}

/// `true` if `width` is strictly narrower than `threshold`.
pub fn is_below(width: f64, threshold: u32) -> bool {
    width < f64::from(threshold)
}

/// What the header shows for a given viewport and menu state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLayout {
    /// The first link, shown on its own.
    pub anchor_link: bool,
    /// All links but the first.
    pub desktop_links: bool,
    pub contact_button: bool,
    pub menu_toggle: bool,
    pub dropdown: bool,
    /// The bar switches to its lighter background.
    pub highlighted_bar: bool,
}

impl HeaderLayout {
    pub fn resolve(viewport: Viewport, menu: MenuState) -> Self {
        let mobile = viewport.below_mobile;
        Self {
            anchor_link: !viewport.below_compact,
            desktop_links: !mobile,
            contact_button: !mobile,
            menu_toggle: mobile,
            dropdown: mobile && menu.is_open(),
            highlighted_bar: menu.is_open(),
        }
    }
}

fn viewport_width() -> Option<f64> {
    window().inner_width().ok().and_then(|width| width.as_f64())
}

/// Tracks whether the window is narrower than `threshold` pixels,
/// re-evaluating whenever the window is resized.
///
/// When rendering on the server there is no window, and the signal stays
/// `false`: the desktop layout is rendered.
pub fn use_media_query(threshold: u32) -> Signal<bool> {
    if cfg!(feature = "ssr") {
        return Signal::stored(false);
    }

    let measure =
        move || viewport_width().is_some_and(|width| is_below(width, threshold));
    let (below, set_below) = signal(measure());

    let handle = window_event_listener(ev::resize, move |_| {
        let now = measure();
        if now != below.get_untracked() {
            log::debug!("viewport crossed {threshold}px breakpoint, below: {now}");
            set_below.set(now);
        }
    });
    on_cleanup(move || handle.remove());

    below.into()
}

/// Both header breakpoints as a single reactive [`Viewport`].
pub fn use_viewport(breakpoints: Breakpoints) -> Signal<Viewport> {
    let below_mobile = use_media_query(breakpoints.mobile);
    let below_compact = use_media_query(breakpoints.compact);
    Signal::derive(move || Viewport {
        below_mobile: below_mobile.get(),
        below_compact: below_compact.get(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BP: Breakpoints = Breakpoints {
        mobile: 768,
        compact: 835,
    };

    fn layout(width: f64, menu: MenuState) -> HeaderLayout {
        HeaderLayout::resolve(BP.classify(width), menu)
    }

    #[test]
    fn threshold_is_exclusive() {
        assert!(is_below(767.0, 768));
        assert!(is_below(767.5, 768));
        assert!(!is_below(768.0, 768));
        assert!(!is_below(1920.0, 768));
    }

    #[test]
    fn contact_button_and_toggle_are_exclusive() {
        for width in [0.0, 320.0, 767.0, 768.0, 800.0, 835.0, 2560.0] {
            for menu in [MenuState::Closed, MenuState::Open] {
                let layout = layout(width, menu);
                assert_ne!(layout.contact_button, layout.menu_toggle);
                assert_eq!(layout.contact_button, width >= 768.0);
            }
        }
    }

    #[test]
    fn dropdown_needs_mobile_and_open_menu() {
        assert!(layout(500.0, MenuState::Open).dropdown);
        assert!(!layout(500.0, MenuState::Closed).dropdown);
        assert!(!layout(1024.0, MenuState::Open).dropdown);
        assert!(!layout(1024.0, MenuState::Closed).dropdown);
    }

    #[test]
    fn links_follow_their_thresholds() {
        let narrow = layout(600.0, MenuState::Closed);
        assert!(!narrow.anchor_link);
        assert!(!narrow.desktop_links);

        let between = layout(800.0, MenuState::Closed);
        assert!(!between.anchor_link);
        assert!(between.desktop_links);

        let wide = layout(835.0, MenuState::Closed);
        assert!(wide.anchor_link);
        assert!(wide.desktop_links);
    }

    #[test]
    fn open_menu_highlights_bar() {
        assert!(layout(500.0, MenuState::Open).highlighted_bar);
        assert!(!layout(500.0, MenuState::Closed).highlighted_bar);
    }

    #[test]
    fn default_breakpoints() {
        assert_eq!(Breakpoints::default(), BP);
    }
}

//! Inline SVG icons, sized to the surrounding text.

use leptos::prelude::*;

/// An envelope.
#[component]
pub fn MailIcon(
    /// Extra classes for the `<svg>` element.
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            width="1em"
            height="1em"
            viewBox="0 0 20 20"
            fill="currentColor"
            aria-hidden="true"
        >
            <path d="M2.003 5.884L10 9.882l7.997-3.998A2 2 0 0016 4H4a2 2 0 00-1.997 1.884z"/>
            <path d="M18 8.118l-8 4-8-4V14a2 2 0 002 2h12a2 2 0 002-2V8.118z"/>
        </svg>
    }
}

/// Three horizontal bars.
#[component]
pub fn HamburgerIcon(
    /// Extra classes for the `<svg>` element.
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=class
            width="1em"
            height="1em"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2.5"
            stroke-linecap="round"
            aria-hidden="true"
        >
            <path d="M3 6h18M3 12h18M3 18h18"/>
        </svg>
    }
}

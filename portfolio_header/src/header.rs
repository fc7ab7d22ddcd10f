use crate::{
    breakpoint::{use_viewport, HeaderLayout},
    links::{anchor_link, desktop_links},
    navigation::use_navigator,
    use_site_config, ContactButton, HeaderLink, MenuState, MobileDropDown,
    MobileNavButton,
};
use leptos::prelude::*;

const BAR_CLASS: &str = "fixed md:static top-0 w-screen h-24 md:h-48 px-8 md:px-24 2xl:px-56 flex flex-row";

fn bar_class(highlighted: bool) -> String {
    let background = if highlighted {
        "bg-epic-black-light"
    } else {
        "bg-epic-black"
    };
    format!("{BAR_CLASS} {background}")
}

/// The site header.
///
/// Renders the logo, the navigation links that fit the current viewport, and
/// either the contact button or, on narrow viewports, the hamburger toggle
/// with its dropdown panel. Which parts are shown is recomputed whenever the
/// window crosses one of the configured breakpoints.
///
/// ```no_run
/// use leptos::prelude::*;
/// use portfolio_header::*;
///
/// #[component]
/// fn App() -> impl IntoView {
///     provide_site_config(SiteConfig::load());
///
///     view! {
///         <Header/>
///         <main id="about">"..."</main>
///     }
/// }
/// ```
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all)
)]
#[component]
pub fn Header() -> impl IntoView {
    let config = use_site_config();
    let navigator = use_navigator();
    let viewport = use_viewport(config.breakpoints());
    let (menu, set_menu) = signal(MenuState::Closed);

    let layout = Memo::new(move |_| {
        HeaderLayout::resolve(viewport.get(), menu.get())
    });

    view! {
        <header class=move || bar_class(layout.get().highlighted_bar)>
            <h1
                class="flex flex-row justify-center items-center text-white text-3xl mr-5"
                on:click=move |_| navigator.go("/")
            >
                <div class="hover:cursor-pointer">{config.nickname}</div>
            </h1>
            <Show when=move || layout.get().anchor_link>
                <HeaderLink link={anchor_link()}/>
            </Show>
            <Show when=move || layout.get().desktop_links>
                {desktop_links()
                    .iter()
                    .map(|link| view! { <HeaderLink link={*link}/> })
                    .collect_view()}
            </Show>
            <Show
                when=move || layout.get().menu_toggle
                fallback=|| view! { <ContactButton/> }
            >
                <MobileNavButton menu set_menu/>
            </Show>
        </header>
        <Show when=move || layout.get().dropdown>
            <MobileDropDown/>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_background_tracks_menu() {
        assert!(bar_class(false).ends_with(" bg-epic-black"));
        assert!(bar_class(true).ends_with(" bg-epic-black-light"));
        assert!(bar_class(true).starts_with("fixed md:static"));
    }
}

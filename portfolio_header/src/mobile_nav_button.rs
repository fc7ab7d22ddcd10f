use crate::{
    hover::{HoverLift, LIFT_TRANSITION},
    icons::HamburgerIcon,
    menu::restore_page_scroll,
    MenuState,
};
use leptos::prelude::*;

/// The hamburger button shown on narrow viewports.
///
/// Each click re-enables page scrolling, in case an open dropdown locked it,
/// and flips the menu between open and closed through `set_menu`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all)
)]
#[component]
pub fn MobileNavButton(
    /// Current menu state, reflected in `aria-expanded`.
    #[prop(into)]
    menu: Signal<MenuState>,
    /// Receives the toggled state on click.
    set_menu: WriteSignal<MenuState>,
) -> impl IntoView {
    let lift = HoverLift::new();

    let toggle = move |_| {
        if let Err(e) = restore_page_scroll() {
            log::warn!("{e}");
        }
        set_menu.update(|menu| *menu = menu.toggled());
    };

    view! {
        <button
            aria-label="toggle navigation menu"
            aria-expanded=move || menu.get().is_open().to_string()
            class="visible md:invisible flex flex-row justify-center items-center text-white text-xl ml-auto hover:cursor-default"
            on:click=toggle
        >
            <div
                class="w-10 lg:w-36 h-10 rounded-full lg:rounded-md bg-pastel-green hover:cursor-pointer"
                on:mouseenter=move |_| lift.raise()
                on:mouseleave=move |_| lift.rest()
                style:transform=move || lift.transform()
                style:transition=LIFT_TRANSITION
            >
                <p class="mt-1.5 text-epic-black">
                    <HamburgerIcon class="float-left mt-[5.25px] ml-2.5"/>
                    <span class="invisible lg:visible">"menu"</span>
                </p>
            </div>
        </button>
    }
}

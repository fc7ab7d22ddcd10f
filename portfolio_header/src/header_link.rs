use crate::{
    hover::{HoverLift, LIFT_TRANSITION},
    Highlight, NavLink,
};
use leptos::prelude::*;

/// A single link in the bar: its marker glyph followed by its name. The link
/// rises slightly while hovered.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all)
)]
#[component]
pub fn HeaderLink(
    /// The link to render.
    link: NavLink,
) -> impl IntoView {
    let lift = HoverLift::new();

    view! {
        <div class="invisible md:visible flex flex-row justify-center items-center text-pastel-white mt-2.5 ml-10">
            <div
                on:mouseenter=move |_| lift.raise()
                on:mouseleave=move |_| lift.rest()
                style:transform=move || lift.transform()
                style:transition=LIFT_TRANSITION
            >
                <a href=link.href class="text-white">
                    <Highlight>{link.slash.prefix()}</Highlight>
                    {link.name}
                </a>
            </div>
        </div>
    }
}

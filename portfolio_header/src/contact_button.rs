use crate::{
    hover::{HoverLift, LIFT_TRANSITION},
    icons::MailIcon,
    navigation::use_navigator,
    use_site_config,
};
use leptos::prelude::*;

/// Desktop call to action that sends the visitor to the contact address.
/// The text label only appears on large viewports; below that it collapses
/// to a round icon button.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all)
)]
#[component]
pub fn ContactButton() -> impl IntoView {
    let contact_url = use_site_config().contact_url;
    let navigator = use_navigator();
    let lift = HoverLift::new();

    view! {
        <button
            aria-label="contact"
            class="invisible md:visible flex flex-row justify-center items-center text-white text-xl ml-auto hover:cursor-default"
            on:click=move |_| navigator.go(&contact_url)
        >
            <div
                class="w-10 lg:w-36 h-10 rounded-full lg:rounded-md bg-pastel-green hover:cursor-pointer"
                on:mouseenter=move |_| lift.raise()
                on:mouseleave=move |_| lift.rest()
                style:transform=move || lift.transform()
                style:transition=LIFT_TRANSITION
            >
                <p class="mt-1.5 text-epic-black">
                    <MailIcon class="float-left mt-[5.25px] ml-2.5"/>
                    <span class="invisible lg:visible">"contact"</span>
                </p>
            </div>
        </button>
    }
}

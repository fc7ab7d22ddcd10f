use crate::{
    hover::{HoverLift, LIFT_TRANSITION},
    navigation::use_navigator,
    use_site_config, Highlight, LINKS,
};
use leptos::prelude::*;

/// The panel listing every link, shown under the bar while the mobile menu
/// is open. Rows navigate on click; the last row is the contact address.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(level = "trace", skip_all)
)]
#[component]
pub fn MobileDropDown() -> impl IntoView {
    let config = use_site_config();
    let navigator = use_navigator();
    let lift = HoverLift::new();

    let rows = LINKS
        .iter()
        .map(|link| {
            let link = *link;
            let navigator = navigator.clone();
            view! {
                <div
                    role="link"
                    data-href=link.href
                    class="hover:cursor-pointer hover:bg-epic-black-light text-center py-2.5 rounded-md"
                    on:click=move |_| navigator.go(link.href)
                >
                    <p class="text-white text-xl">
                        <Highlight>{link.slash.prefix()}</Highlight>
                        {link.name}
                    </p>
                </div>
            }
        })
        .collect_view();

    let contact_url = config.contact_url;
    let contact_href = contact_url.clone();

    view! {
        <nav class="relative top-20 w-screen h-72 px-10 flex flex-col bg-epic-black-light shadow-epic-black-light shadow-xl">
            {rows}
            <div
                role="link"
                data-href=contact_href
                class="hover:cursor-pointer bg-pastel-green text-center text-xl py-2.5 rounded-md mt-2.5"
                on:mouseenter=move |_| lift.raise()
                on:mouseleave=move |_| lift.rest()
                style:transform=move || lift.transform()
                style:transition=LIFT_TRANSITION
                on:click=move |_| navigator.go(&contact_url)
            >
                <p class="text-epic-black">{config.contact_label}</p>
            </div>
        </nav>
    }
}

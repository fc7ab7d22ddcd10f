use leptos::prelude::*;

/// Renders its children in the site's accent colour.
#[component]
pub fn Highlight(children: Children) -> impl IntoView {
    view! { <span class="text-pastel-green">{children()}</span> }
}

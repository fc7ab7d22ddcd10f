use leptos::prelude::*;
use portfolio_header::{provide_site_config, Header, SiteConfig};

fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    mount_to_body(|| {
        provide_site_config(SiteConfig::load());
        view! { <Header/> }
    })
}

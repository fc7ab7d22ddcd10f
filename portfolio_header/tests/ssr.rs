#[cfg(feature = "ssr")]
mod imports {
    pub use leptos::prelude::*;
    pub use portfolio_header::{links::SPONSOR_URL, *};
}

#[cfg(feature = "ssr")]
fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
    needles
        .iter()
        .map(|needle| {
            html.find(needle)
                .unwrap_or_else(|| panic!("{needle} missing from {html}"))
        })
        .collect()
}

#[cfg(feature = "ssr")]
#[test]
fn header_renders_desktop_layout() {
    use imports::*;

    let owner = Owner::new();
    owner.set();

    let html = view! { <Header/> }.to_html();

    assert!(html.contains("loom4k"));
    assert!(html.contains(r#"aria-label="contact""#));
    assert!(!html.contains("toggle navigation menu"));
    // the dropdown only exists while the mobile menu is open
    assert!(!html.contains(r#"role="link""#));
    assert!(html.contains("bg-epic-black\""));

    let hrefs = [
        "href=\"#about\"".to_string(),
        "href=\"/stack\"".to_string(),
        "href=\"/blog\"".to_string(),
        format!("href=\"{SPONSOR_URL}\""),
    ];
    let hrefs: Vec<&str> = hrefs.iter().map(String::as_str).collect();
    let found = positions(&html, &hrefs);
    assert!(found.windows(2).all(|pair| pair[0] < pair[1]));
}

#[cfg(feature = "ssr")]
#[test]
fn header_uses_configured_nickname() {
    use imports::*;

    let owner = Owner::new();
    owner.set();
    provide_site_config(SiteConfig {
        nickname: "someone-else".into(),
        ..SiteConfig::default()
    });

    let html = view! { <Header/> }.to_html();
    assert!(html.contains("someone-else"));
    assert!(!html.contains("loom4k<"));
}

#[cfg(feature = "ssr")]
#[test]
fn header_link_shows_marker_and_name() {
    use imports::*;

    let owner = Owner::new();
    owner.set();

    let html = view! { <HeaderLink link={LINKS[3]}/> }.to_html();
    assert!(html.contains(&format!("href=\"{SPONSOR_URL}\"")));
    assert!(html.contains("→\u{a0}</span>"));
    assert!(html.contains("sponsorme"));
    assert!(html.contains("translateY(0px)"));

    let html = view! { <HeaderLink link={LINKS[0]}/> }.to_html();
    assert!(html.contains(">#</span>"));
    assert!(html.contains("about"));
}

#[cfg(feature = "ssr")]
#[test]
fn dropdown_lists_every_link_then_contact() {
    use imports::*;

    let owner = Owner::new();
    owner.set();

    let html = view! { <MobileDropDown/> }.to_html();
    let config = SiteConfig::default();

    let mut rows: Vec<String> = LINKS
        .iter()
        .map(|link| format!("data-href=\"{}\"", link.href))
        .collect();
    rows.push(format!("data-href=\"{}\"", config.contact_url));
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();

    let found = positions(&html, &rows);
    assert!(found.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(html.contains(&config.contact_label));
    assert!(html.contains(">/</span>"));
}

#[cfg(feature = "ssr")]
#[test]
fn nav_button_reflects_menu_state() {
    use imports::*;

    let owner = Owner::new();
    owner.set();

    let (menu, set_menu) = signal(MenuState::Closed);
    let html = view! { <MobileNavButton menu set_menu/> }.to_html();
    assert!(html.contains(r#"aria-expanded="false""#));

    set_menu.set(MenuState::Open);
    let html = view! { <MobileNavButton menu set_menu/> }.to_html();
    assert!(html.contains(r#"aria-expanded="true""#));
}

#![forbid(unsafe_code)]

//! # Portfolio Header
//!
//! The responsive navigation header of the loom4k portfolio site, written
//! with [`Leptos`](https://github.com/leptos-rs/leptos).
//!
//! On wide viewports the header shows the logo, the navigation links and a
//! contact button. Below the mobile breakpoint the links collapse into a
//! hamburger button that opens a full-width dropdown.
//!
//! ```ignore
//! use leptos::prelude::*;
//! use portfolio_header::*;
//!
//! mount_to_body(|| {
//!     provide_site_config(SiteConfig::load());
//!     view! { <Header/> }
//! });
//! ```
//!
//! # Feature Flags
//! - `csr` Client-side rendering: mount the header in the browser. Required
//!   by the `portfolio_header` binary.
//! - `ssr` Server-side rendering: render the header to an HTML string.
//! - `tracing` Instrument components with [`tracing`](https://docs.rs/tracing).

pub mod breakpoint;
mod contact_button;
mod errors;
mod header;
mod header_link;
mod highlight;
pub mod hover;
pub mod icons;
pub mod links;
pub mod menu;
mod mobile_dropdown;
mod mobile_nav_button;
pub mod navigation;
pub mod site;

pub use breakpoint::{use_media_query, Breakpoints, HeaderLayout, Viewport};
pub use contact_button::*;
pub use errors::HeaderError;
pub use header::*;
pub use header_link::*;
pub use highlight::*;
pub use links::{NavLink, Slash, LINKS};
pub use menu::MenuState;
pub use mobile_dropdown::*;
pub use mobile_nav_button::*;
pub use navigation::{
    provide_navigator, use_navigator, BrowserNavigator, MemoryNavigator,
    Navigator, NavigatorContext,
};
pub use site::{
    provide_site_config, site_config_from_str, use_site_config, SiteConfig,
};

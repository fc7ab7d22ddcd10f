//! Site-wide settings consumed by the header.
//!
//! Settings are read from TOML and may be overridden by environment
//! variables prefixed with `SITE_`. Keys are kebab-case in TOML and the
//! matching variable is the upper snake-case form, so `contact-url` is
//! overridden by `SITE_CONTACT_URL`.

use crate::{breakpoint::Breakpoints, HeaderError};
use config::{Case, Config, Environment, File, FileFormat};
use leptos::prelude::{provide_context, use_context};
use serde::Deserialize;

/// The configuration shipped with the site.
pub const DEFAULT_SITE_TOML: &str = include_str!("../site.toml");

/// Address that forwards to the site owner's mailbox.
pub const CONTACT_URL: &str =
    "https://hidemyemail.cc/a5f135c348ace656c125b7f87aee3bc6";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SiteConfig {
    /// Shown as the logo text.
    pub nickname: String,
    /// Where the contact button and dropdown row send the visitor.
    pub contact_url: String,
    /// Label of the contact row in the mobile dropdown.
    pub contact_label: String,
    /// Below this width (px) the header switches to the hamburger menu.
    pub mobile_breakpoint: u32,
    /// Below this width (px) the in-page anchor link is hidden.
    pub compact_breakpoint: u32,
}

impl Default for SiteConfig {
    fn default() -> Self {
        let breakpoints = Breakpoints::default();
        Self {
            nickname: "loom4k".to_string(),
            contact_url: CONTACT_URL.to_string(),
            contact_label: "contact@loom4k.me".to_string(),
            mobile_breakpoint: breakpoints.mobile,
            compact_breakpoint: breakpoints.compact,
        }
    }
}

impl SiteConfig {
    /// Loads the shipped configuration with any environment overrides.
    ///
    /// This never fails: if the configuration cannot be read, the problem is
    /// logged and the built-in defaults are used instead.
    pub fn load() -> Self {
        match site_config_from_str(DEFAULT_SITE_TOML) {
            Ok(config) => config,
            Err(e) => {
                log::warn!("{e}, falling back to default site config");
                Self::default()
            }
        }
    }

    pub fn breakpoints(&self) -> Breakpoints {
        Breakpoints {
            mobile: self.mobile_breakpoint,
            compact: self.compact_breakpoint,
        }
    }
}

/// Parses a [`SiteConfig`] from TOML text, applying `SITE_*` environment
/// overrides on top. Keys missing from both sources take their defaults.
///
/// Fails if the nickname is blank or if `compact-breakpoint` is below
/// `mobile-breakpoint`.
pub fn site_config_from_str(text: &str) -> Result<SiteConfig, HeaderError> {
    let config = Config::builder()
        .add_source(File::from_str(text, FileFormat::Toml))
        .add_source(
            Environment::with_prefix("SITE")
                .convert_case(Case::Kebab)
                .try_parsing(true),
        )
        .build()?;
    let site = config.try_deserialize::<SiteConfig>()?;
    if site.nickname.trim().is_empty() {
        return Err(HeaderError::Config("nickname must not be empty".into()));
    }
    // the anchor link is hidden before the bar collapses, never after
    if site.compact_breakpoint < site.mobile_breakpoint {
        return Err(HeaderError::Config(format!(
            "compact-breakpoint ({}) must not be below mobile-breakpoint ({})",
            site.compact_breakpoint, site.mobile_breakpoint
        )));
    }
    Ok(site)
}

/// Makes `config` available to every header component below the current
/// owner.
pub fn provide_site_config(config: SiteConfig) {
    provide_context(config);
}

/// Returns the provided [`SiteConfig`], or the defaults if none was provided.
pub fn use_site_config() -> SiteConfig {
    use_context::<SiteConfig>().unwrap_or_default()
}

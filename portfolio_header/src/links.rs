//! The fixed set of navigation links shown in the header and the mobile
//! dropdown.

/// The marker printed before a link's label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slash {
    /// `#`, used for in-page anchors.
    Hash,
    /// `/`, used for paths on this site.
    Slash,
    /// `→`, used for links that leave the site.
    Arrow,
}

impl Slash {
    /// The bare glyph for this marker.
    pub const fn glyph(self) -> &'static str {
        match self {
            Slash::Hash => "#",
            Slash::Slash => "/",
            Slash::Arrow => "→",
        }
    }

    /// The glyph as rendered in front of a label. The arrow carries a
    /// non-breaking space so it never sits flush against the text.
    pub const fn prefix(self) -> &'static str {
        match self {
            Slash::Arrow => "→\u{a0}",
            other => other.glyph(),
        }
    }
}

/// One entry in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub name: &'static str,
    pub href: &'static str,
    pub slash: Slash,
}

impl NavLink {
    pub const fn new(
        name: &'static str,
        href: &'static str,
        slash: Slash,
    ) -> Self {
        Self { name, href, slash }
    }
}

/// Sponsorship page, the only link that leaves the site.
pub const SPONSOR_URL: &str = "https://github.com/sponsors/loom4k";

/// Every link, in display order. The first entry is the in-page anchor that
/// the header shows separately on wide viewports.
pub const LINKS: [NavLink; 4] = [
    NavLink::new("about", "#about", Slash::Hash),
    NavLink::new("stack", "/stack", Slash::Slash),
    NavLink::new("blog", "/blog", Slash::Slash),
    NavLink::new("sponsorme", SPONSOR_URL, Slash::Arrow),
];

/// The link shown on its own once the viewport is wide enough.
pub const fn anchor_link() -> NavLink {
    LINKS[0]
}

/// The links shown together on desktop viewports: everything but the first.
pub fn desktop_links() -> &'static [NavLink] {
    &LINKS[1..]
}

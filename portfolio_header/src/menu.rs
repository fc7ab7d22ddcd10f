use crate::{errors::js_message, HeaderError};
use leptos::prelude::document;

/// Whether the mobile dropdown is expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    /// The opposite state. Both transitions come from the same button.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        }
    }

    pub const fn is_open(self) -> bool {
        matches!(self, MenuState::Open)
    }
}

/// Re-enables page scrolling, which an open dropdown may have locked by
/// setting `overflow: hidden` on `<body>`.
pub fn restore_page_scroll() -> Result<(), HeaderError> {
    let body = document()
        .body()
        .ok_or_else(|| HeaderError::Scroll("document has no <body>".into()))?;
    body.style()
        .set_property("overflow", "auto")
        .map_err(|e| HeaderError::Scroll(js_message(&e)))
}

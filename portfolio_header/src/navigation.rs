//! Full-page navigation triggered by clicks in the header.
//!
//! Components never touch `window.location` directly. They ask the
//! [`Navigator`] in context, which is the browser by default and can be
//! swapped for a [`MemoryNavigator`] when there is no browser to drive.

use crate::{errors::js_message, HeaderError};
use leptos::prelude::{provide_context, use_context, window};
use or_poisoned::OrPoisoned;
use std::{
    fmt,
    sync::{Arc, Mutex},
};

pub trait Navigator: Send + Sync + 'static {
    /// Sends the visitor to `href`.
    fn navigate(&self, href: &str) -> Result<(), HeaderError>;
}

/// Navigates by assigning `window.location.href`, which triggers a full page
/// load (and with it, resets all header state).
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn navigate(&self, href: &str) -> Result<(), HeaderError> {
        window().location().set_href(href).map_err(|e| {
            HeaderError::Navigation {
                href: href.to_string(),
                message: js_message(&e),
            }
        })
    }
}

/// Records navigation targets instead of following them.
#[derive(Debug, Clone, Default)]
pub struct MemoryNavigator {
    visited: Arc<Mutex<Vec<String>>>,
}

impl MemoryNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every target navigated to so far, oldest first.
    pub fn visited(&self) -> Vec<String> {
        self.visited.lock().or_poisoned().clone()
    }

    pub fn last(&self) -> Option<String> {
        self.visited.lock().or_poisoned().last().cloned()
    }
}

impl Navigator for MemoryNavigator {
    fn navigate(&self, href: &str) -> Result<(), HeaderError> {
        self.visited.lock().or_poisoned().push(href.to_string());
        Ok(())
    }
}

/// The navigator shared through context.
#[derive(Clone)]
pub struct NavigatorContext(Arc<dyn Navigator>);

impl fmt::Debug for NavigatorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("NavigatorContext").finish_non_exhaustive()
    }
}

impl Default for NavigatorContext {
    fn default() -> Self {
        Self::new(BrowserNavigator)
    }
}

impl NavigatorContext {
    pub fn new(navigator: impl Navigator) -> Self {
        Self(Arc::new(navigator))
    }

    /// Navigates to `href`, logging instead of failing if the browser
    /// refuses.
    pub fn go(&self, href: &str) {
        log::debug!("navigating to {href}");
        if let Err(e) = self.0.navigate(href) {
            log::error!("{e}");
        }
    }
}

/// Provides `navigator` to every header component below the current owner.
pub fn provide_navigator(navigator: impl Navigator) {
    provide_context(NavigatorContext::new(navigator));
}

/// Returns the navigator in context, falling back to the browser.
pub fn use_navigator() -> NavigatorContext {
    use_context::<NavigatorContext>().unwrap_or_default()
}

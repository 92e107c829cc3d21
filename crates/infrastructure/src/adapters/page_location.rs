//! In-memory page location adapter

use docbase_application::ports::PageLocation;
use parking_lot::Mutex;

/// Page location kept in memory, for embedding hosts that poll the current
/// location instead of navigating a real browser page.
///
/// Concurrent assignments are serialized; the last writer wins.
#[derive(Debug)]
pub struct InMemoryPageLocation {
    origin: String,
    href: Mutex<Option<String>>,
}

impl InMemoryPageLocation {
    /// Creates a page served from `origin` that has not navigated yet.
    #[must_use]
    pub fn new(origin: impl Into<String>) -> Self {
        Self {
            origin: origin.into(),
            href: Mutex::new(None),
        }
    }

    /// Returns the last assigned location.
    #[must_use]
    pub fn current(&self) -> Option<String> {
        self.href.lock().clone()
    }

    /// Returns and clears the last assigned location.
    pub fn take(&self) -> Option<String> {
        self.href.lock().take()
    }
}

impl PageLocation for InMemoryPageLocation {
    fn origin(&self) -> String {
        self.origin.clone()
    }

    fn assign(&self, href: &str) {
        *self.href.lock() = Some(href.to_string());
    }
}

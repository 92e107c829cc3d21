//! Navigation ports
//!
//! A session expiry ends in a navigation to the sign-in page. How that
//! navigation happens depends on where the client runs: an interactive page
//! changes its own location, a pre-render or server context hands a redirect
//! to its host.

/// The location of an interactive page.
pub trait PageLocation: Send + Sync {
    /// Returns the page origin (e.g., `http://localhost:3000`).
    fn origin(&self) -> String;

    /// Navigates the page to `href`.
    fn assign(&self, href: &str);
}

/// Redirect primitive supplied by a non-interactive host.
pub trait ServerRedirect: Send + Sync {
    /// Redirects the current request to `location`.
    fn redirect(&self, location: &str);
}

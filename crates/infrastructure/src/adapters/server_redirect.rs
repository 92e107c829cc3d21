//! Callback-based server redirect adapter

use std::fmt;

use docbase_application::ports::ServerRedirect;

type RedirectCallback = Box<dyn Fn(&str) + Send + Sync>;

/// Server redirect that hands every location to a callback.
///
/// Hosts use it to turn a sign-in redirect into whatever their request
/// handling needs: a response header, a message, a flag.
pub struct CallbackRedirect {
    callback: RedirectCallback,
}

impl CallbackRedirect {
    /// Creates a redirect that invokes `callback` with each location.
    pub fn new(callback: impl Fn(&str) + Send + Sync + 'static) -> Self {
        Self {
            callback: Box::new(callback),
        }
    }
}

impl ServerRedirect for CallbackRedirect {
    fn redirect(&self, location: &str) {
        (self.callback)(location);
    }
}

impl fmt::Debug for CallbackRedirect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackRedirect").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use parking_lot::Mutex;

    use super::*;

    #[test]
    fn test_callback_receives_location() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let redirect = CallbackRedirect::new(move |location| sink.lock().push(location.to_string()));

        redirect.redirect("/auth/signin");

        assert_eq!(*seen.lock(), vec!["/auth/signin".to_string()]);
    }
}

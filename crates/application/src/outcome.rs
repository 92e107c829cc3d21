//! Result of a call that may end with an expired session

/// What a call produced when it did not fail.
///
/// A 401 reply is not reported as an error. The pipeline issues the sign-in
/// redirect and the call resolves to `SessionExpired`, which callers must not
/// treat as data.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Outcome<T> {
    /// The service answered with data.
    Completed(T),
    /// The session expired; a sign-in redirect has been issued.
    SessionExpired,
}

impl<T> Outcome<T> {
    /// Returns true if the session expired.
    pub const fn is_expired(&self) -> bool {
        matches!(self, Self::SessionExpired)
    }

    /// Converts into an `Option`, dropping the expiry marker.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Completed(value) => Some(value),
            Self::SessionExpired => None,
        }
    }

    /// Maps the data, leaving an expiry untouched.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Outcome<U> {
        match self {
            Self::Completed(value) => Outcome::Completed(f(value)),
            Self::SessionExpired => Outcome::SessionExpired,
        }
    }

    /// Maps the data with a fallible function, leaving an expiry untouched.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `f`.
    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<Outcome<U>, E> {
        match self {
            Self::Completed(value) => f(value).map(Outcome::Completed),
            Self::SessionExpired => Ok(Outcome::SessionExpired),
        }
    }
}

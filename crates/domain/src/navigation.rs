//! Sign-in redirect locations

/// Path of the sign-in page.
pub const SIGN_IN_PATH: &str = "/auth/signin";

/// Reason shown on the sign-in page after a session expires.
pub const SESSION_EXPIRED_REASON: &str = "Session expired, please sign-in again";

/// Builds the sign-in location carrying `reason` as the `why` query parameter.
///
/// An empty reason produces the bare sign-in path.
///
/// ```
/// use docbase_domain::navigation::sign_in_location;
///
/// assert_eq!(sign_in_location(""), "/auth/signin");
/// assert_eq!(sign_in_location("bye now"), "/auth/signin?why=bye%20now");
/// ```
#[must_use]
pub fn sign_in_location(reason: &str) -> String {
    if reason.is_empty() {
        return SIGN_IN_PATH.to_string();
    }
    format!("{SIGN_IN_PATH}?why={}", urlencoding::encode(reason))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_expired_location() {
        assert_eq!(
            sign_in_location(SESSION_EXPIRED_REASON),
            "/auth/signin?why=Session%20expired%2C%20please%20sign-in%20again"
        );
    }

    #[test]
    fn test_reason_is_escaped() {
        assert_eq!(
            sign_in_location("a&b=c"),
            "/auth/signin?why=a%26b%3Dc"
        );
    }
}

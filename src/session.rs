//! Client-side session state.
//!
//! The session is a transient, in-memory authentication flag: created as
//! [`Session::Anonymous`] at application start, flipped to
//! [`Session::Authenticated`] by a login submission, and reset by logout.
//! Nothing is persisted across restarts and no credential material is
//! retained after submission.
//!
//! An explicit two-state enum is used rather than a boolean so that a real
//! credential check can slot in later without ambiguity.

/// Transient authentication state for the current page session.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Session {
    /// No login has happened (or the user logged out)
    #[default]
    Anonymous,
    /// A login form was submitted with non-empty credentials
    Authenticated,
}

impl Session {
    /// Whether protected views may be shown.
    pub fn is_authenticated(self) -> bool {
        matches!(self, Session::Authenticated)
    }

    /// Attempt a login with the submitted credentials.
    ///
    /// Any non-empty username/password pair is accepted; there is no real
    /// credential check in this demo. Empty or whitespace-only fields leave
    /// the session unchanged.
    #[must_use]
    pub fn login(self, username: &str, password: &str) -> Session {
        if username.trim().is_empty() || password.trim().is_empty() {
            self
        } else {
            Session::Authenticated
        }
    }

    /// Log out, returning to the anonymous state.
    #[must_use]
    pub fn logout(self) -> Session {
        Session::Anonymous
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_anonymous() {
        assert_eq!(Session::default(), Session::Anonymous);
        assert!(!Session::default().is_authenticated());
    }

    #[test]
    fn test_login_accepts_any_nonempty_credentials() {
        let session = Session::Anonymous.login("admin", "123");
        assert!(session.is_authenticated());

        // No real validation: arbitrary strings work too
        let session = Session::Anonymous.login("anyone", "anything");
        assert!(session.is_authenticated());
    }

    #[test]
    fn test_login_rejects_empty_fields() {
        assert_eq!(Session::Anonymous.login("", "123"), Session::Anonymous);
        assert_eq!(Session::Anonymous.login("admin", ""), Session::Anonymous);
        assert_eq!(Session::Anonymous.login("  ", "123"), Session::Anonymous);
    }

    #[test]
    fn test_login_logout_round_trip() {
        let session = Session::Anonymous.login("admin", "123");
        assert!(session.is_authenticated());

        let session = session.logout();
        assert_eq!(session, Session::Anonymous);
        assert!(!session.is_authenticated());
    }

    #[test]
    fn test_logout_is_idempotent() {
        assert_eq!(Session::Anonymous.logout(), Session::Anonymous);
    }
}

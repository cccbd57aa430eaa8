//! Session keys.

/// Key for storing the logged-in username in the session.
pub const SESSION_USERNAME_KEY: &str = "username";

//! Credential checking.
//!
//! The policy is exact string comparison against one configured pair. This is
//! the documented behavior of the system, not a hardened protocol; see the
//! project non-goals before reaching for anything stronger here.

/// A username/password pair as typed by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// Username buffer content.
    pub username: String,
    /// Password buffer content.
    pub password: String,
}

impl Credentials {
    /// Create credentials from the two buffers.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }
}

/// The configured pair credentials are compared against.
///
/// Explicit value threaded into each controller; there is no process-wide
/// account store.
#[derive(Debug, Clone)]
pub struct CredentialPolicy {
    username: String,
    password: String,
}

impl CredentialPolicy {
    /// Create a policy accepting exactly this pair.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self { username: username.into(), password: password.into() }
    }

    /// Whether the submitted credentials match, by exact equality.
    pub fn verify(&self, credentials: &Credentials) -> bool {
        credentials.username == self.username && credentials.password == self.password
    }
}

impl Default for CredentialPolicy {
    /// The fixture pair the system has always shipped with.
    fn default() -> Self {
        Self::new("user", "pass")
    }
}

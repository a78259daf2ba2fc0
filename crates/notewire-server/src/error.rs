//! Session layer errors.

use thiserror::Error;

/// Errors surfaced by the supervisor.
///
/// Everything recoverable (auth failure, fetch failure) is represented in
/// controller state instead; these are the conditions that end or prevent a
/// session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// The transport reported no attached interactive terminal.
    ///
    /// Fatal for the session: a diagnostic has been sent to the client and
    /// no controller was started.
    #[error("session rejected: no interactive terminal attached")]
    Rejected,
}

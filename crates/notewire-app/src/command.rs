//! Controller side-effect requests.
//!
//! A [`Command`] is a nullary asynchronous operation the executor runs off
//! the controller's synchronous path. Each command produces at most one
//! [`crate::Event`] when it completes; commands never touch view state
//! directly.

/// Async work requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch the item list for a user from the repository.
    FetchItems {
        /// Username the repository keys items by.
        username: String,
    },
}

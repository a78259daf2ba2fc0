//! Repository error types.

use thiserror::Error;

/// Errors returned by an [`crate::ItemRepository`].
///
/// A failed fetch is recoverable for the session that issued it: the
/// controller renders an empty list with a failure notice and keeps going.
#[derive(Debug, Clone, Error)]
pub enum RepositoryError {
    /// The backing store could not be reached.
    #[error("repository unavailable: {0}")]
    Unavailable(String),

    /// The backing store answered but the data was unusable.
    #[error("corrupt item data: {0}")]
    Corrupt(String),
}

//! List entries.

use serde::{Deserialize, Serialize};

/// One entry in a user's item list.
///
/// Immutable once created; lists hold items in insertion order and never
/// mutate entries in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    /// Short title shown in the list.
    pub title: String,
    /// One-line summary shown next to the title.
    pub description: String,
    /// Full body shown in the detail view.
    pub content: String,
}

impl Item {
    /// Create an item from its three parts.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        Self { title: title.into(), description: description.into(), content: content.into() }
    }

    /// Create an item from a composed draft.
    ///
    /// The draft text becomes the title verbatim and the body; the summary
    /// is derived from the title.
    pub fn from_draft(draft: impl Into<String>) -> Self {
        let draft = draft.into();
        let description = format!("Description for {draft}");
        Self { title: draft.clone(), description, content: draft }
    }
}

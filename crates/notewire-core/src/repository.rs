//! Item repository seam.
//!
//! The repository is the only external data collaborator the session layer
//! talks to. It is async so fetches can run off the controller's synchronous
//! path; deadline and retry policy belong to implementations, not callers.

use std::{collections::HashMap, future::Future, sync::Arc, time::Duration};

use crate::{Item, error::RepositoryError};

/// Username-keyed item store.
///
/// Implementations must be cheap to clone and safe to share across session
/// tasks; fetches for distinct sessions run concurrently.
pub trait ItemRepository: Send + Sync + 'static {
    /// Fetch the ordered item sequence for a username.
    ///
    /// An unknown username yields an empty sequence, not an error; errors
    /// mean the store itself misbehaved.
    fn fetch_items(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Vec<Item>, RepositoryError>> + Send;
}

/// In-memory repository with per-user seeded item sets.
///
/// Clones share the same underlying map. The optional latency makes the
/// non-blocking fetch path observable in demos and tests; it is not a
/// deadline mechanism.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    items: Arc<HashMap<String, Vec<Item>>>,
    latency: Option<Duration>,
}

impl MemoryRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository from explicit per-user item sets.
    pub fn with_items(items: HashMap<String, Vec<Item>>) -> Self {
        Self { items: Arc::new(items), latency: None }
    }

    /// Create a repository seeded with the demo fixtures for the default
    /// `user` account.
    pub fn seeded() -> Self {
        let mut items = HashMap::new();
        items.insert("user".to_string(), demo_items());
        Self::with_items(items)
    }

    /// Add simulated latency to every fetch.
    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = Some(latency);
        self
    }
}

impl ItemRepository for MemoryRepository {
    async fn fetch_items(&self, username: &str) -> Result<Vec<Item>, RepositoryError> {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
        let items = self.items.get(username).cloned().unwrap_or_default();
        tracing::debug!(username, count = items.len(), "fetched items");
        Ok(items)
    }
}

/// Fixture entries seeded for the default demo account.
fn demo_items() -> Vec<Item> {
    vec![
        Item::new(
            "HTML",
            "HTML (HyperText Markup Language) is the standard markup language used to create and structure web pages.",
            "HTML Content goes here...",
        ),
        Item::new(
            "CSS",
            "CSS (Cascading Style Sheets) is a style sheet language used for describing the presentation of a document.",
            "CSS Content goes here...",
        ),
        Item::new(
            "JavaScript",
            "JavaScript is a programming language used to add interactivity and dynamic behavior to web pages.",
            "JavaScript Content goes here...",
        ),
        Item::new(
            "React",
            "React is a JavaScript library for building user interfaces.",
            "React Content goes here...",
        ),
        Item::new(
            "Vue.js",
            "Vue.js is a progressive JavaScript framework for building user interfaces.",
            "Vue.js Content goes here...",
        ),
    ]
}

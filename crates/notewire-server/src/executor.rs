//! Command executor.
//!
//! Runs each controller command as its own task so the session loop never
//! blocks on repository access. Exactly one completion event is posted back
//! per command; completions of distinct commands are unordered relative to
//! each other. Commands never touch view state — only the event they
//! produce does, back on the session's single queue.

use std::sync::Arc;

use notewire_app::{Command, Event};
use notewire_core::ItemRepository;
use tokio::sync::mpsc;

/// Fans controller commands out to concurrent tasks.
pub struct CommandExecutor<R> {
    repository: Arc<R>,
    results: mpsc::Sender<Event>,
}

impl<R: ItemRepository> CommandExecutor<R> {
    /// Create an executor posting completions into the given queue.
    pub fn new(repository: Arc<R>, results: mpsc::Sender<Event>) -> Self {
        Self { repository, results }
    }

    /// Run one command concurrently with the session loop.
    ///
    /// A repository failure becomes an empty `ItemsLoaded` carrying the
    /// failure indicator — fetch errors are recoverable list state, never
    /// session errors. If the session is gone by the time the command
    /// completes, the result is discarded.
    pub fn dispatch(&self, session_id: u64, command: Command) {
        match command {
            Command::FetchItems { username } => {
                let repository = Arc::clone(&self.repository);
                let results = self.results.clone();

                tokio::spawn(async move {
                    let event = match repository.fetch_items(&username).await {
                        Ok(items) => Event::ItemsLoaded { items, failed: false },
                        Err(error) => {
                            tracing::warn!(session_id, %error, "item fetch failed");
                            Event::ItemsLoaded { items: Vec::new(), failed: true }
                        }
                    };

                    if results.send(event).await.is_err() {
                        tracing::debug!(session_id, "session gone, discarding fetch result");
                    }
                });
            }
        }
    }
}

//! Session supervisor.
//!
//! Accepts transports, gates on the interactive-terminal requirement, and
//! runs one isolated session task per accepted transport. Sessions share the
//! repository handle and nothing else; each controller is owned by exactly
//! one task and every event it sees arrives through that task's queue.

use std::sync::{
    Arc,
    atomic::{AtomicU64, Ordering},
};

use notewire_app::{Controller, Theme};
use notewire_core::{CredentialPolicy, ItemRepository};
use tokio::sync::mpsc;

use crate::{CommandExecutor, SessionError, SessionTransport};

/// Diagnostic sent to clients rejected for lacking a terminal.
const NO_TERMINAL: &str = "no active terminal, closing session";

/// Capacity of a session's command-result queue.
const RESULT_QUEUE_DEPTH: usize = 32;

/// Creates and supervises sessions.
///
/// Holds the shared collaborators (repository, credential policy, theme) and
/// hands each accepted session its own controller, executor, and event loop.
pub struct Supervisor<R> {
    repository: Arc<R>,
    policy: CredentialPolicy,
    theme: Theme,
    next_session_id: AtomicU64,
}

impl<R: ItemRepository> Supervisor<R> {
    /// Create a supervisor over the given collaborators.
    pub fn new(repository: R, policy: CredentialPolicy, theme: Theme) -> Self {
        Self {
            repository: Arc::new(repository),
            policy,
            theme,
            next_session_id: AtomicU64::new(1),
        }
    }

    /// Accept a transport and start its session.
    ///
    /// Requires the transport to report an attached interactive terminal:
    /// without one, a single fatal diagnostic is sent, no controller is
    /// created, and [`SessionError::Rejected`] is returned. On success the
    /// session runs as its own task until quit or disconnect; on every exit
    /// path the transport is closed and in-flight command results are
    /// discarded rather than applied.
    pub async fn create_session<T: SessionTransport>(
        &self,
        mut transport: T,
    ) -> Result<SessionHandle, SessionError> {
        if !transport.is_interactive() {
            tracing::warn!("rejecting session without interactive terminal");
            if let Err(error) = transport.send_diagnostic(NO_TERMINAL).await {
                tracing::debug!(%error, "rejected client also unreachable");
            }
            transport.close().await;
            return Err(SessionError::Rejected);
        }

        let session_id = self.next_session_id.fetch_add(1, Ordering::Relaxed);
        let (cols, rows) = transport.initial_size();
        let controller = Controller::new(session_id, cols, rows, self.policy.clone());

        let (results_tx, results_rx) = mpsc::channel(RESULT_QUEUE_DEPTH);
        let executor = CommandExecutor::new(Arc::clone(&self.repository), results_tx);
        let theme = self.theme.clone();

        tracing::info!(session_id, cols, rows, "session started");
        let task = tokio::spawn(run_session(
            session_id, controller, transport, executor, results_rx, theme,
        ));

        Ok(SessionHandle { session_id, task })
    }
}

/// Handle to a running session task.
pub struct SessionHandle {
    session_id: u64,
    task: tokio::task::JoinHandle<()>,
}

impl SessionHandle {
    /// Id the supervisor assigned to this session.
    pub fn id(&self) -> u64 {
        self.session_id
    }

    /// Wait for the session to end.
    pub async fn wait(self) {
        if let Err(error) = self.task.await {
            tracing::error!(session_id = self.session_id, %error, "session task failed");
        }
    }

    /// Force the session task down without waiting.
    pub fn abort(&self) {
        self.task.abort();
    }
}

/// One session's event loop.
///
/// Strictly sequential per session: at most one feed executes at a time, so
/// there are no intra-session races by construction. The loop's only
/// blocking point is waiting for the next event; command results and
/// transport input race fairly through the select.
async fn run_session<R, T>(
    session_id: u64,
    mut controller: Controller,
    mut transport: T,
    executor: CommandExecutor<R>,
    mut results: mpsc::Receiver<notewire_app::Event>,
    theme: Theme,
) where
    R: ItemRepository,
    T: SessionTransport,
{
    if let Err(error) = transport.send_frame(&controller.current_frame(&theme)).await {
        tracing::warn!(session_id, %error, "initial frame write failed");
        transport.close().await;
        return;
    }

    loop {
        let event = tokio::select! {
            event = transport.next_event() => match event {
                Some(event) => event,
                None => {
                    tracing::info!(session_id, "client disconnected");
                    break;
                }
            },
            result = results.recv() => match result {
                Some(event) => event,
                // Unreachable while this loop owns the executor
                None => break,
            },
        };

        for command in controller.feed(event) {
            executor.dispatch(session_id, command);
        }

        if let Err(error) = transport.send_frame(&controller.current_frame(&theme)).await {
            tracing::warn!(session_id, %error, "frame write failed, tearing down");
            break;
        }

        if controller.is_terminated() {
            tracing::info!(session_id, "session quit");
            break;
        }
    }

    transport.close().await;
    // Dropping the result receiver here discards completions still in
    // flight; nothing can re-enter the destroyed controller.
}

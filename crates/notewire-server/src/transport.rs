//! Session transport seam.
//!
//! The [`SessionTransport`] trait decouples the session loop from transport
//! mechanics (remote shells, local terminals, test harnesses). The transport
//! parses its own input into [`Event`]s and accepts rendered frames as plain
//! strings; session negotiation and pseudo-terminal allocation happen before
//! a transport ever reaches the supervisor.

use std::future::Future;

use notewire_app::Event;
use thiserror::Error;
use tokio::sync::mpsc;

/// Transport side of one session.
///
/// Implementations provide input events and accept rendered frames while the
/// generic session loop handles all orchestration.
pub trait SessionTransport: Send + 'static {
    /// Transport-specific write error type.
    type Error: std::error::Error + Send + 'static;

    /// Whether an interactive terminal is attached to this session.
    ///
    /// Sessions without one are rejected before a controller exists.
    fn is_interactive(&self) -> bool;

    /// Terminal geometry at session start (columns, rows).
    fn initial_size(&self) -> (u16, u16);

    /// Next input event, or `None` once the client has disconnected.
    fn next_event(&mut self) -> impl Future<Output = Option<Event>> + Send;

    /// Deliver a rendered text frame to the client.
    fn send_frame(&mut self, frame: &str)
    -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Deliver a fatal diagnostic line to the client.
    ///
    /// Used for conditions that end the session before or outside the
    /// rendered interface, such as a missing terminal.
    fn send_diagnostic(
        &mut self,
        message: &str,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Release the rendering handle and any transport resources.
    fn close(&mut self) -> impl Future<Output = ()> + Send;
}

/// Error for channel-backed transports: the peer hung up.
#[derive(Debug, Error)]
#[error("frame channel closed")]
pub struct ChannelClosed;

/// Client-side handles for a [`ChannelTransport`].
///
/// Tests and embedders drive the session by sending events and reading the
/// frames the session writes. Dropping the event sender is a disconnect.
pub struct ChannelClient {
    /// Input events into the session.
    pub events: mpsc::Sender<Event>,
    /// Rendered frames (and diagnostics) out of the session.
    pub frames: mpsc::Receiver<String>,
}

/// In-process transport over a pair of channels.
///
/// No network: events and frames flow through mpsc queues, which makes
/// session behavior deterministic enough to assert on in tests.
pub struct ChannelTransport {
    interactive: bool,
    size: (u16, u16),
    events: mpsc::Receiver<Event>,
    frames: mpsc::Sender<String>,
}

impl ChannelTransport {
    /// Create an interactive transport with the given geometry.
    pub fn interactive(cols: u16, rows: u16) -> (Self, ChannelClient) {
        Self::create(true, cols, rows)
    }

    /// Create a transport that reports no attached terminal.
    pub fn headless() -> (Self, ChannelClient) {
        Self::create(false, 0, 0)
    }

    fn create(interactive: bool, cols: u16, rows: u16) -> (Self, ChannelClient) {
        let (event_tx, event_rx) = mpsc::channel(32);
        let (frame_tx, frame_rx) = mpsc::channel(32);

        let transport =
            Self { interactive, size: (cols, rows), events: event_rx, frames: frame_tx };
        let client = ChannelClient { events: event_tx, frames: frame_rx };
        (transport, client)
    }
}

impl SessionTransport for ChannelTransport {
    type Error = ChannelClosed;

    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn initial_size(&self) -> (u16, u16) {
        self.size
    }

    async fn next_event(&mut self) -> Option<Event> {
        self.events.recv().await
    }

    async fn send_frame(&mut self, frame: &str) -> Result<(), ChannelClosed> {
        self.frames.send(frame.to_string()).await.map_err(|_| ChannelClosed)
    }

    async fn send_diagnostic(&mut self, message: &str) -> Result<(), ChannelClosed> {
        self.frames.send(message.to_string()).await.map_err(|_| ChannelClosed)
    }

    async fn close(&mut self) {
        self.events.close();
    }
}

//! Session layer for notewire.
//!
//! The async shell around the pure view controller: one task per session,
//! commands fanned out to concurrent fetch tasks, results funneled back into
//! the session's single event queue. Sessions share nothing with each other.
//!
//! # Components
//!
//! - [`Supervisor`]: accepts transports, gates on interactive terminals,
//!   owns session spawn and teardown
//! - [`CommandExecutor`]: runs controller commands off the synchronous path
//! - [`SessionTransport`]: the seam to transport-level collaborators, with
//!   [`ChannelTransport`] for tests and embedding

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod executor;
mod supervisor;
mod transport;

pub use error::SessionError;
pub use executor::CommandExecutor;
pub use supervisor::{SessionHandle, Supervisor};
pub use transport::{ChannelClient, ChannelClosed, ChannelTransport, SessionTransport};

//! Local terminal shell for notewire.
//!
//! A thin [`notewire_server::SessionTransport`] over crossterm so one
//! session can be driven end to end in the developer's own terminal. All
//! interaction policy lives in the controller; this crate only converts
//! keys and writes frames.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod terminal;

pub use terminal::{TermError, TerminalTransport};

//! View controller for notewire.
//!
//! Pure per-session state machine plus a pure text renderer. The controller
//! consumes [`Event`] inputs and produces [`Command`] side-effect requests;
//! it never performs I/O itself, which keeps the whole interaction policy
//! testable without a terminal or a runtime.
//!
//! # Components
//!
//! - [`Controller`]: the reducer — `feed(event) -> commands`
//! - [`ViewState`]: tagged union over the screen modes
//! - [`Event`] / [`KeyInput`]: the only inputs the controller accepts
//! - [`Command`]: async work requested by a transition
//! - [`render`] / [`Theme`]: state to text frame, no side effects

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod command;
mod controller;
mod event;
mod input;
pub mod render;
mod session;
mod view;

pub use command::Command;
pub use controller::Controller;
pub use event::Event;
pub use input::KeyInput;
pub use render::{Theme, render};
pub use session::{Lifecycle, Session};
pub use view::{DetailView, EditorView, ListView, LoginView, ViewState};

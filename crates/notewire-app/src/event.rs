//! Controller input events.
//!
//! [`Event`] is the complete set of inputs the controller accepts. Events
//! originate from two sources: user interaction relayed by the transport
//! (keys, resize, pointer) and completions of async commands posted back by
//! the executor.

use notewire_core::Item;

use crate::KeyInput;

/// Events processed by the view controller.
#[derive(Debug, Clone)]
pub enum Event {
    /// Keyboard input.
    Key(KeyInput),

    /// Terminal resize (columns, rows).
    Resize(u16, u16),

    /// Pointer position report (column, row).
    ///
    /// Only states that declare pointer interest react; everywhere else
    /// this is a no-op.
    Pointer(u16, u16),

    /// Completion of a fetch command.
    ///
    /// Replaces the list payload's item sequence wherever that payload
    /// currently lives, regardless of the active view tag.
    ItemsLoaded {
        /// Fetched items, empty on failure.
        items: Vec<Item>,
        /// Failure indicator for the recoverable empty-list state.
        failed: bool,
    },
}

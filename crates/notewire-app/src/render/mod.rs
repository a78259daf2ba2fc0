//! Frame rendering.
//!
//! Pure functions from view state to a displayable text frame. No I/O, no
//! side effects; rendering the same state twice yields the same frame. The
//! transport decides what to do with the string — styling and border
//! primitives live outside the core.

mod detail;
mod editor;
mod list;
mod login;
mod theme;

pub use theme::Theme;

use crate::{Session, ViewState};

/// Shown once after the session terminates, before the transport closes.
const FAREWELL: &str = "exiting the session\n";

/// Render the active view to a text frame.
pub fn render(view: &ViewState, session: &Session, theme: &Theme) -> String {
    if session.is_terminated() {
        return FAREWELL.to_string();
    }

    match view {
        ViewState::Login(login) => login::render(login, theme),
        ViewState::List(list) => list::render(list, session, theme),
        ViewState::Editor(editor) => editor::render(editor, session, theme),
        ViewState::Detail(detail) => detail::render(detail, session, theme),
    }
}

/// Truncate a line to a column budget, by characters.
fn clip(line: &str, width: usize) -> String {
    line.chars().take(width).collect()
}

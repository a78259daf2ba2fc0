//! Terminal-agnostic keyboard input.

/// Keyboard input abstraction.
///
/// Decouples the controller from terminal libraries (crossterm, termion,
/// a remote channel) so transition policy can be tested with plain values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    /// Printable character.
    Char(char),
    /// Character with the control modifier held.
    Ctrl(char),
    /// Enter/Return key.
    Enter,
    /// Backspace key.
    Backspace,
    /// Delete key.
    Delete,
    /// Tab key.
    Tab,
    /// Escape key.
    Esc,
    /// Up arrow key.
    Up,
    /// Down arrow key.
    Down,
}

//! Crossterm-backed session transport.
//!
//! Owns raw mode and the alternate screen for the lifetime of the session;
//! restores the terminal on close and again on drop in case the session
//! loop never got that far.

use std::io::{self, IsTerminal, Write};

use crossterm::{
    QueueableCommand,
    cursor::MoveTo,
    event::{
        DisableMouseCapture, EnableMouseCapture, Event as TermEvent, EventStream, KeyCode,
        KeyEventKind, KeyModifiers, MouseEventKind,
    },
    style::Print,
    terminal::{
        Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
        enable_raw_mode,
    },
};
use futures::StreamExt;
use notewire_app::{Event, KeyInput};
use notewire_server::SessionTransport;
use thiserror::Error;

/// Terminal transport errors.
#[derive(Debug, Error)]
pub enum TermError {
    /// I/O error from terminal operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Session transport over the local terminal.
pub struct TerminalTransport {
    interactive: bool,
    size: (u16, u16),
    events: EventStream,
    restored: bool,
}

impl TerminalTransport {
    /// Claim the local terminal.
    ///
    /// Only enters raw mode and the alternate screen when stdin and stdout
    /// are both terminals; otherwise the transport reports itself
    /// non-interactive and the supervisor rejects the session.
    pub fn new() -> Result<Self, TermError> {
        let interactive = io::stdin().is_terminal() && io::stdout().is_terminal();

        if interactive {
            enable_raw_mode()?;
            let mut out = io::stdout();
            out.queue(EnterAlternateScreen)?;
            out.queue(EnableMouseCapture)?;
            out.flush()?;
        }

        let size = crossterm::terminal::size().unwrap_or((80, 24));

        Ok(Self { interactive, size, events: EventStream::new(), restored: !interactive })
    }

    /// Convert a crossterm event to a controller event.
    fn convert(event: TermEvent) -> Option<Event> {
        match event {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                if key.modifiers.contains(KeyModifiers::CONTROL) {
                    if let KeyCode::Char(c) = key.code {
                        return Some(Event::Key(KeyInput::Ctrl(c)));
                    }
                }
                let key = match key.code {
                    KeyCode::Char(c) => KeyInput::Char(c),
                    KeyCode::Enter => KeyInput::Enter,
                    KeyCode::Backspace => KeyInput::Backspace,
                    KeyCode::Delete => KeyInput::Delete,
                    KeyCode::Tab => KeyInput::Tab,
                    KeyCode::Esc => KeyInput::Esc,
                    KeyCode::Up => KeyInput::Up,
                    KeyCode::Down => KeyInput::Down,
                    _ => return None,
                };
                Some(Event::Key(key))
            }
            TermEvent::Resize(cols, rows) => Some(Event::Resize(cols, rows)),
            TermEvent::Mouse(mouse) => match mouse.kind {
                MouseEventKind::Down(_)
                | MouseEventKind::Drag(_)
                | MouseEventKind::ScrollUp
                | MouseEventKind::ScrollDown => Some(Event::Pointer(mouse.column, mouse.row)),
                _ => None,
            },
            _ => None,
        }
    }

    fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;

        let mut out = io::stdout();
        let _ = out.queue(DisableMouseCapture);
        let _ = out.queue(LeaveAlternateScreen);
        let _ = out.flush();
        let _ = disable_raw_mode();
    }
}

impl SessionTransport for TerminalTransport {
    type Error = TermError;

    fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn initial_size(&self) -> (u16, u16) {
        self.size
    }

    async fn next_event(&mut self) -> Option<Event> {
        loop {
            match self.events.next().await {
                Some(Ok(event)) => {
                    if let Some(event) = Self::convert(event) {
                        return Some(event);
                    }
                }
                Some(Err(error)) => {
                    tracing::warn!(%error, "terminal event stream error");
                    return None;
                }
                None => return None,
            }
        }
    }

    async fn send_frame(&mut self, frame: &str) -> Result<(), TermError> {
        let mut out = io::stdout();
        out.queue(MoveTo(0, 0))?;
        out.queue(Clear(ClearType::All))?;

        // Raw mode needs explicit carriage returns
        for (row, line) in frame.split('\n').enumerate() {
            out.queue(MoveTo(0, row as u16))?;
            out.queue(Print(line))?;
        }
        out.flush()?;
        Ok(())
    }

    async fn send_diagnostic(&mut self, message: &str) -> Result<(), TermError> {
        let mut err = io::stderr();
        writeln!(err, "{message}")?;
        Ok(())
    }

    async fn close(&mut self) {
        self.restore();
    }
}

impl Drop for TerminalTransport {
    fn drop(&mut self) {
        self.restore();
    }
}

//! View controller state machine.
//!
//! The controller is the reducer for one session: it owns the [`Session`]
//! and the active [`ViewState`], consumes [`Event`] inputs, and returns the
//! [`Command`]s a transition wants executed. It performs no I/O and never
//! blocks, so the session loop can interleave it freely with async fetches.
//!
//! Transition policy in brief:
//!
//! - any event not meaningful for the current mode is a silent no-op
//! - `Ctrl+C` terminates from every mode; after that every feed is a no-op
//! - resize updates geometry in every mode without changing the tag
//! - fetch completions apply to the list payload regardless of the tag

use notewire_core::CredentialPolicy;

use crate::{
    Command, Event, KeyInput, Session, ViewState,
    render::{self, Theme},
    view::{DetailView, EditorView, ListView},
};

/// Message shown after a rejected login attempt.
const AUTH_ERROR: &str = "Invalid username or password";

/// Per-session state machine.
///
/// Pure: events in, commands out. Exclusively owned by one session task.
#[derive(Debug)]
pub struct Controller {
    session: Session,
    view: ViewState,
    policy: CredentialPolicy,
    user: Option<String>,
}

impl Controller {
    /// Create a controller seeded at the login view.
    pub fn new(session_id: u64, cols: u16, rows: u16, policy: CredentialPolicy) -> Self {
        Self {
            session: Session::new(session_id, cols, rows),
            view: ViewState::default(),
            policy,
            user: None,
        }
    }

    /// The session this controller drives.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The active view.
    pub fn view(&self) -> &ViewState {
        &self.view
    }

    /// Authenticated username, once login has succeeded.
    pub fn user(&self) -> Option<&str> {
        self.user.as_deref()
    }

    /// Whether the session has terminated.
    pub fn is_terminated(&self) -> bool {
        self.session.is_terminated()
    }

    /// Render the active view to a text frame.
    pub fn current_frame(&self, theme: &Theme) -> String {
        render::render(&self.view, &self.session, theme)
    }

    /// Process one event.
    ///
    /// Returns the commands the transition requests; an empty vector means
    /// no async work. After termination this is a no-op.
    pub fn feed(&mut self, event: Event) -> Vec<Command> {
        if self.session.is_terminated() {
            tracing::trace!(session = self.session.id(), "event after termination dropped");
            return Vec::new();
        }

        match event {
            Event::Resize(cols, rows) => {
                self.session.resize(cols, rows);
                Vec::new()
            }
            Event::Key(KeyInput::Ctrl('c')) => {
                tracing::info!(session = self.session.id(), "quit requested");
                self.session.terminate();
                Vec::new()
            }
            Event::Key(key) => self.on_key(key),
            Event::Pointer(x, y) => {
                self.on_pointer(x, y);
                Vec::new()
            }
            Event::ItemsLoaded { items, failed } => {
                self.on_items_loaded(items, failed);
                Vec::new()
            }
        }
    }

    fn on_key(&mut self, key: KeyInput) -> Vec<Command> {
        let mut commands = Vec::new();
        let view = std::mem::take(&mut self.view);

        self.view = match view {
            ViewState::Login(mut login) => match key {
                KeyInput::Char(c) => {
                    login.push_char(c);
                    ViewState::Login(login)
                }
                KeyInput::Backspace | KeyInput::Delete => {
                    login.backspace();
                    ViewState::Login(login)
                }
                KeyInput::Enter if !login.entering_password() => {
                    login.begin_password();
                    ViewState::Login(login)
                }
                KeyInput::Enter => {
                    let credentials = login.credentials();
                    if self.policy.verify(&credentials) {
                        tracing::debug!(
                            session = self.session.id(),
                            user = %credentials.username,
                            "authenticated"
                        );
                        self.user = Some(credentials.username.clone());
                        commands.push(Command::FetchItems { username: credentials.username });
                        ViewState::List(ListView::loading())
                    } else {
                        tracing::debug!(session = self.session.id(), "authentication failed");
                        login.reject(AUTH_ERROR);
                        ViewState::Login(login)
                    }
                }
                KeyInput::Esc => {
                    self.session.terminate();
                    ViewState::Login(login)
                }
                _ => ViewState::Login(login),
            },

            ViewState::List(mut list) => match key {
                KeyInput::Up => {
                    list.select_prev();
                    ViewState::List(list)
                }
                KeyInput::Down => {
                    list.select_next();
                    ViewState::List(list)
                }
                KeyInput::Ctrl('a') => ViewState::Editor(EditorView::new(list)),
                KeyInput::Enter => match list.selected_item().cloned() {
                    Some(item) => ViewState::Detail(DetailView::new(item, list)),
                    None => ViewState::List(list),
                },
                _ => ViewState::List(list),
            },

            ViewState::Editor(mut editor) => match key {
                KeyInput::Char(c) => {
                    editor.push_char(c);
                    ViewState::Editor(editor)
                }
                KeyInput::Enter => {
                    editor.push_char('\n');
                    ViewState::Editor(editor)
                }
                KeyInput::Backspace | KeyInput::Delete => {
                    editor.backspace();
                    ViewState::Editor(editor)
                }
                KeyInput::Ctrl('e') => ViewState::List(editor.commit()),
                KeyInput::Ctrl('a') => ViewState::List(editor.cancel()),
                _ => ViewState::Editor(editor),
            },

            ViewState::Detail(detail) => match key {
                KeyInput::Ctrl('z') | KeyInput::Esc => ViewState::List(detail.back()),
                _ => ViewState::Detail(detail),
            },
        };

        commands
    }

    /// Pointer events reach only modes with pointer interest: Detail.
    fn on_pointer(&mut self, _x: u16, y: u16) {
        if let ViewState::Detail(detail) = &mut self.view {
            let rows = u32::from(self.session.rows().max(1));
            let lines = detail.item().content.lines().count() as u32;
            detail.set_scroll((u32::from(y) * lines / rows) as u16);
        }
    }

    /// Apply a fetch completion to the list payload wherever it lives.
    ///
    /// Still applies when the user has navigated to Editor or Detail: the
    /// refreshed list becomes observable on the way back. Before
    /// authentication there is no list payload and the result is dropped.
    fn on_items_loaded(&mut self, items: Vec<notewire_core::Item>, failed: bool) {
        let view = self.view.name();
        match self.view.list_mut() {
            Some(list) => {
                tracing::debug!(
                    session = self.session.id(),
                    count = items.len(),
                    failed,
                    view,
                    "applying fetch result"
                );
                list.replace(items, failed);
            }
            None => {
                tracing::trace!(session = self.session.id(), "fetch result with no list payload");
            }
        }
    }
}

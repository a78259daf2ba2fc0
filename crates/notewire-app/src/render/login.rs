//! Login frame.
//!
//! Mirrors the staged credential prompt: the password line only appears
//! after the username field is submitted, and input there is masked.

use crate::view::LoginView;

use super::Theme;

pub(super) fn render(login: &LoginView, theme: &Theme) -> String {
    let mut frame = String::new();

    frame.push_str("Please enter your credentials:\n\n");

    frame.push_str("Username: ");
    frame.push_str(login.username());
    frame.push('\n');

    if login.entering_password() {
        frame.push_str("Password: ");
        for _ in login.password().chars() {
            frame.push(theme.mask);
        }
        frame.push('\n');
    }

    if let Some(error) = login.error() {
        frame.push('\n');
        frame.push_str(error);
        frame.push('\n');
    }

    frame
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_line_hidden_until_username_submitted() {
        let mut login = LoginView::default();
        login.push_char('u');
        let frame = render(&login, &Theme::default());
        assert!(frame.contains("Username: u"));
        assert!(!frame.contains("Password:"));
    }

    #[test]
    fn password_input_is_masked() {
        let mut login = LoginView::default();
        login.begin_password();
        login.push_char('s');
        login.push_char('e');
        login.push_char('c');

        let frame = render(&login, &Theme::default());
        assert!(frame.contains("Password: ***"));
        assert!(!frame.contains("sec"));
    }

    #[test]
    fn rejection_message_is_shown() {
        let mut login = LoginView::default();
        login.reject("Invalid username or password");

        let frame = render(&login, &Theme::default());
        assert!(frame.contains("Invalid username or password"));
    }
}

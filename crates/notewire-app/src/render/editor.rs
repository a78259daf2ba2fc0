//! Editor frame.
//!
//! Split composition view: the draft buffer on the left, a preview of the
//! same text on the right, joined row by row with the divider glyph.

use crate::{Session, view::EditorView};

use super::{Theme, clip};

/// Columns consumed by the divider and its padding.
const SPLIT_CHROME: usize = 3;

pub(super) fn render(editor: &EditorView, session: &Session, theme: &Theme) -> String {
    let width = usize::from(session.cols().max(20));
    let pane = (width.saturating_sub(SPLIT_CHROME)) / 2;

    let mut frame = String::new();
    frame.push_str("compose\n\n");

    // The buffer always contributes at least one (possibly empty) row so
    // the cursor line is visible in an empty editor.
    let draft: Vec<&str> = if editor.buffer().is_empty() {
        vec![""]
    } else {
        editor.buffer().split('\n').collect()
    };

    for line in &draft {
        let left = clip(line, pane);
        let right = clip(line, pane);
        frame.push_str(&format!("{left:<pane$} {} {right}\n", theme.divider));
    }

    frame.push('\n');
    frame.push_str("ctrl+e: save  ctrl+a: discard  ctrl+c: quit\n");
    frame
}

#[cfg(test)]
mod tests {
    use crate::view::ListView;

    use super::*;

    fn session() -> Session {
        Session::new(1, 80, 24)
    }

    #[test]
    fn buffer_appears_in_both_panes() {
        let mut editor = EditorView::new(ListView::new());
        for c in "draft".chars() {
            editor.push_char(c);
        }

        let frame = render(&editor, &session(), &Theme::default());
        let row = frame.lines().nth(2).unwrap();
        assert_eq!(row.matches("draft").count(), 2);
        assert!(row.contains('|'));
    }

    #[test]
    fn empty_buffer_still_renders_a_row() {
        let editor = EditorView::new(ListView::new());
        let frame = render(&editor, &session(), &Theme::default());
        assert!(frame.lines().nth(2).unwrap().contains('|'));
    }

    #[test]
    fn newlines_split_into_rows() {
        let mut editor = EditorView::new(ListView::new());
        for c in "one\ntwo".chars() {
            editor.push_char(c);
        }

        let frame = render(&editor, &session(), &Theme::default());
        assert!(frame.lines().any(|l| l.starts_with("one")));
        assert!(frame.lines().any(|l| l.starts_with("two")));
    }
}

//! Item list frame.

use crate::{Session, view::ListView};

use super::{Theme, clip};

/// Columns reserved for the cursor marker and padding.
const GUTTER: usize = 2;

pub(super) fn render(list: &ListView, session: &Session, theme: &Theme) -> String {
    let width = usize::from(session.cols().max(20));
    let mut frame = String::new();

    frame.push_str(&theme.list_title);
    frame.push('\n');
    frame.push('\n');

    if list.items().is_empty() {
        if list.is_loading() {
            frame.push_str("fetching your items...\n");
        } else if list.fetch_failed() {
            frame.push_str("could not load your items; starting with an empty list\n");
        } else {
            frame.push_str("no items yet\n");
        }
    } else {
        for (index, item) in list.items().iter().enumerate() {
            let marker = if index == list.selected() { theme.cursor.as_str() } else { " " };
            let line = format!("{marker} {} - {}", item.title, item.description);
            frame.push_str(&clip(&line, width.saturating_sub(GUTTER)));
            frame.push('\n');
        }
    }

    frame.push('\n');
    frame.push_str("ctrl+a: compose  enter: open  ctrl+c: quit\n");
    frame
}

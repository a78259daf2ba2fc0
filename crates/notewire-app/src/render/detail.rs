//! Detail frame.

use crate::{Session, view::DetailView};

use super::{Theme, clip};

/// Rows consumed by the title, rule, spacing, and footer.
const CHROME_ROWS: u16 = 5;

pub(super) fn render(detail: &DetailView, session: &Session, theme: &Theme) -> String {
    let width = usize::from(session.cols().max(20));
    let viewport = usize::from(session.rows().max(CHROME_ROWS + 1) - CHROME_ROWS);

    let item = detail.item();
    let mut frame = String::new();

    frame.push_str(&clip(&item.title, width));
    frame.push('\n');
    for _ in 0..width.min(item.title.chars().count().max(8)) {
        frame.push(theme.rule);
    }
    frame.push('\n');
    frame.push('\n');

    for line in item.content.lines().skip(usize::from(detail.scroll())).take(viewport) {
        frame.push_str(&clip(line, width));
        frame.push('\n');
    }

    frame.push('\n');
    frame.push_str("ctrl+z: back  ctrl+c: quit\n");
    frame
}

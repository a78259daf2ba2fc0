//! Renderer configuration.

/// Text decorations for the renderer.
///
/// An explicit value threaded into every render call; replaces the global
/// style state the earlier drafts mutated from anywhere.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Heading shown above the item list.
    pub list_title: String,
    /// Marker in front of the selected list entry.
    pub cursor: String,
    /// Character used to mask password input.
    pub mask: char,
    /// Character used for horizontal rules.
    pub rule: char,
    /// Character separating the editor and preview panes.
    pub divider: char,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            list_title: "your notes".to_string(),
            cursor: ">".to_string(),
            mask: '*',
            rule: '-',
            divider: '|',
        }
    }
}

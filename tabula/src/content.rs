//! Displayable content produced by cell and header render functions.

use unicode_width::UnicodeWidthStr;

/// Content of a single rendered cell.
///
/// The grid never interprets content beyond measuring it; presentation
/// layers map each variant onto their own draw primitives.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Content {
    /// Nothing to display.
    #[default]
    Empty,
    /// Plain text.
    Text(String),
}

impl Content {
    /// Create text content.
    pub fn text(text: impl Into<String>) -> Self {
        Content::Text(text.into())
    }

    /// The text of this content, empty for [`Content::Empty`].
    pub fn as_str(&self) -> &str {
        match self {
            Content::Empty => "",
            Content::Text(text) => text,
        }
    }

    /// Display width in terminal cells.
    pub fn width(&self) -> usize {
        self.as_str().width()
    }
}

impl From<&str> for Content {
    fn from(text: &str) -> Self {
        Content::Text(text.to_string())
    }
}

impl From<String> for Content {
    fn from(text: String) -> Self {
        Content::Text(text)
    }
}

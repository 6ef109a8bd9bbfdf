// src/types/rich_text.rs
//! Inline rich text — a span of plain text with optional styling and link.

use serde::{Deserialize, Serialize};

/// Style flags attached to a rich text span.
///
/// The all-false default means "plain text". Flags are not exclusive:
/// bold and italic compose, while code takes over the rendering entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Annotations {
    pub bold: bool,
    pub italic: bool,
    pub code: bool,
}

impl Annotations {
    pub fn is_plain(&self) -> bool {
        !self.bold && !self.italic && !self.code
    }
}

/// A single run of styled text. A paragraph is an ordered sequence of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextItem {
    pub plain_text: String,
    pub annotations: Annotations,
    pub href: Option<String>,
}

impl RichTextItem {
    /// Create a plain text item — the most common rich text variant.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            plain_text: text.into(),
            annotations: Annotations::default(),
            href: None,
        }
    }

    /// Create a styled item without a link.
    pub fn styled(text: impl Into<String>, annotations: Annotations) -> Self {
        Self {
            plain_text: text.into(),
            annotations,
            href: None,
        }
    }

    pub fn with_href(mut self, href: impl Into<String>) -> Self {
        self.href = Some(href.into());
        self
    }
}

//! Rendered relationship label.

use serde::Serialize;
use std::fmt;

/// Output of the relationship namer.
///
/// Markup is not embedded: `emphasized` tells the presentation layer to stress
/// `text`, and `note` carries the optional alternate phrasing shown after it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Label {
    /// Primary kinship term
    pub text: String,

    /// Whether the primary term should be rendered with emphasis
    pub emphasized: bool,

    /// Alternate "or" phrasing for distant or compound relationships
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Label {
    /// Create an emphasized label without a note
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasized: true,
            note: None,
        }
    }

    /// Create a label without emphasis
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            emphasized: false,
            ..Self::new(text)
        }
    }

    /// Attach an alternate phrasing
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Render as an HTML fragment: bold term, note on the following line.
    pub fn to_html(&self) -> String {
        let text = escape_html(&self.text);
        let mut html = if self.emphasized {
            format!("<b>{}</b>", text)
        } else {
            text
        };
        if let Some(note) = &self.note {
            html.push_str("<br>&nbsp; (");
            html.push_str(&escape_html(note));
            html.push(')');
        }
        html
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.note {
            Some(note) => write!(f, "{} ({})", self.text, note),
            None => f.write_str(&self.text),
        }
    }
}

/// Escape text for inclusion in an HTML fragment.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

use std::sync::OnceLock;

use regex::Regex;

/// A list item marker found at the start of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListMarker<'a> {
    /// Indent, bullet or number, and the single whitespace char after it.
    pub prefix: &'a str,
    /// Everything after the prefix.
    pub content: &'a str,
}

impl ListMarker<'_> {
    /// Width of the hanging indent used for continuation lines.
    pub fn indent_width(&self) -> usize {
        self.prefix.chars().count()
    }

    /// The continuation prefix: one space per character of the marker prefix.
    pub fn continuation(&self) -> String {
        " ".repeat(self.indent_width())
    }
}

/// Bullet (`-`, `*`, `+`) or ordered (`1.`) list item.
pub struct ListItem;

impl ListItem {
    fn pattern() -> &'static Regex {
        static LIST_MARKER: OnceLock<Regex> = OnceLock::new();
        LIST_MARKER.get_or_init(|| {
            Regex::new(r"^\s*(?:[-*+]|\d+\.)\s").expect("Invalid list marker regex")
        })
    }

    /// Splits a list item line into its marker prefix and content.
    pub fn match_marker(line: &str) -> Option<ListMarker<'_>> {
        let m = Self::pattern().find(line)?;
        Some(ListMarker {
            prefix: &line[..m.end()],
            content: &line[m.end()..],
        })
    }
}

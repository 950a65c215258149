use crate::formatting::{inline::tokenize, wrap::wrap_tokens};

use super::kinds::ListMarker;

/// Why a run of lines is copied through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerbatimKind {
    Blank,
    Heading,
    Admonition,
    /// Delimiters and contents of a fenced code block.
    CodeFence,
    /// Delimiters and contents of a display-math block.
    MathFence,
}

/// A segment of the document with one treatment.
///
/// Blocks borrow their lines from the input and come out of the segmenter in
/// document order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block<'a> {
    /// Lines emitted exactly as written.
    Verbatim {
        kind: VerbatimKind,
        lines: Vec<&'a str>,
    },
    /// A single list item line, wrapped under a hanging indent.
    ListItem(ListMarker<'a>),
    /// Prose lines merged into one paragraph and rewrapped.
    Paragraph {
        /// Blockquote prefix (`> `, `>> `) stripped from the lines and
        /// re-applied to every wrapped line.
        callout: Option<String>,
        lines: Vec<&'a str>,
    },
}

impl Block<'_> {
    /// Appends this block's output lines to `out`, wrapping at `width`.
    ///
    /// Prefixes count against the width; when a prefix is wider than `width`
    /// every token ends up on its own line.
    pub fn render(&self, width: usize, out: &mut Vec<String>) {
        match self {
            Block::Verbatim { lines, .. } => {
                out.extend(lines.iter().map(|line| (*line).to_string()));
            }
            Block::ListItem(marker) => {
                let tokens = tokenize(marker.content);
                let wrapped = wrap_tokens(&tokens, width.saturating_sub(marker.indent_width()));
                if wrapped.is_empty() {
                    out.push(marker.prefix.to_string());
                    return;
                }

                let continuation = marker.continuation();
                for (i, line) in wrapped.iter().enumerate() {
                    let prefix = if i == 0 {
                        marker.prefix
                    } else {
                        continuation.as_str()
                    };
                    out.push(format!("{prefix}{line}"));
                }
            }
            Block::Paragraph { callout, lines } => {
                let text = lines.join(" ");
                let prefix = callout.as_deref().unwrap_or_default();
                let tokens = tokenize(&text);
                let wrapped = wrap_tokens(&tokens, width.saturating_sub(prefix.chars().count()));
                if wrapped.is_empty() {
                    // Only reachable for an empty quote line like `> `.
                    out.push(prefix.to_string());
                    return;
                }

                out.extend(wrapped.iter().map(|line| format!("{prefix}{line}")));
            }
        }
    }
}

use super::kinds::{
    Admonition, BlockQuote, Callout, CodeFence, Heading, ListItem, ListMarker, MathFence,
};

/// Classification of a single line containing only local facts.
///
/// Each line is classified independently; what the classification means
/// depends on the segmenter's state (inside a fence everything is content).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineClass<'a> {
    /// Whitespace only.
    Blank,
    /// `#` to `######` followed by whitespace.
    Heading,
    /// Three backticks at the start of the line.
    CodeFence,
    /// `$$` at the start of the trimmed line.
    MathFence,
    /// Bullet or numbered list item.
    ListItem(ListMarker<'a>),
    /// Blockquote line carrying `[!type]`.
    Admonition,
    /// Blockquote line.
    Callout(Callout<'a>),
    /// Anything else.
    Prose,
}

impl LineClass<'_> {
    /// Whether a line of this class ends a prose run.
    ///
    /// Admonition and callout lines do not: once a run is open they are
    /// absorbed like any other text.
    pub fn ends_prose_run(&self) -> bool {
        matches!(
            self,
            LineClass::Blank
                | LineClass::Heading
                | LineClass::CodeFence
                | LineClass::MathFence
                | LineClass::ListItem(_)
        )
    }
}

/// Classifies individual lines for the segmenter.
pub struct MarkdownLineClassifier;

impl MarkdownLineClassifier {
    /// Classifies a line into a [`LineClass`].
    ///
    /// Precedence: code fence, math fence, heading, blank, list item,
    /// admonition, callout, prose.
    pub fn classify<'a>(&self, line: &'a str) -> LineClass<'a> {
        if CodeFence::is_delimiter(line) {
            return LineClass::CodeFence;
        }
        if MathFence::is_delimiter(line) {
            return LineClass::MathFence;
        }
        if Heading::is_heading(line) {
            return LineClass::Heading;
        }
        if line.trim().is_empty() {
            return LineClass::Blank;
        }
        if let Some(marker) = ListItem::match_marker(line) {
            return LineClass::ListItem(marker);
        }
        if Admonition::is_marker(line) {
            return LineClass::Admonition;
        }
        if let Some(callout) = BlockQuote::split(line) {
            return LineClass::Callout(callout);
        }
        LineClass::Prose
    }
}

/// A blockquote / callout marker split off the front of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Callout<'a> {
    /// The run of `>` characters.
    pub markers: &'a str,
    /// The line after the markers and at most one whitespace char.
    pub content: &'a str,
}

impl Callout<'_> {
    /// The prefix re-applied to every wrapped line: the markers plus one space.
    pub fn prefix(&self) -> String {
        format!("{} ", self.markers)
    }
}

/// Blockquote block type with owned delimiter constant.
pub struct BlockQuote;

impl BlockQuote {
    /// The blockquote prefix character.
    pub const PREFIX: char = '>';

    /// Strips the leading `>` run and one following whitespace char.
    ///
    /// Only a contiguous run counts: `>> text` has two markers, `> > text`
    /// has one marker and content `> text`.
    pub fn split(line: &str) -> Option<Callout<'_>> {
        let rest = line.trim_start_matches(Self::PREFIX);
        let depth = line.len() - rest.len();
        if depth == 0 {
            return None;
        }

        let content = match rest.chars().next() {
            Some(c) if c.is_whitespace() => &rest[c.len_utf8()..],
            _ => rest,
        };

        Some(Callout {
            markers: &line[..depth],
            content,
        })
    }
}

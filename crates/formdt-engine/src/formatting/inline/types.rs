/// The construct a protected span was recognised as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpanKind {
    /// `[text](url)`
    Link,
    /// `![alt](url)`
    Image,
    /// `$$...$$` on a prose line.
    InlineMath,
}

/// An atomic unit of prose that the wrapper never splits.
///
/// Both variants borrow from the flattened paragraph text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'a> {
    /// A whitespace-delimited word.
    Word(&'a str),
    /// A link, image or inline math span, kept whole even if it contains spaces.
    Protected { kind: SpanKind, text: &'a str },
}

impl<'a> Token<'a> {
    /// The token text exactly as it appears in the paragraph.
    pub fn as_str(&self) -> &'a str {
        match self {
            Token::Word(text) | Token::Protected { text, .. } => text,
        }
    }

    /// Rendered length in characters (code points).
    pub fn char_len(&self) -> usize {
        self.as_str().chars().count()
    }

    pub fn is_protected(&self) -> bool {
        matches!(self, Token::Protected { .. })
    }
}

//! Greedy first-fit packing of tokens into lines.

use textwrap::{core::Fragment, wrap_algorithms::wrap_first_fit};

use super::inline::{Token, tokenize};

/// Tokens are separated by exactly one space and never hyphenated.
impl Fragment for Token<'_> {
    fn width(&self) -> f64 {
        self.char_len() as f64
    }

    fn whitespace_width(&self) -> f64 {
        1.0
    }

    fn penalty_width(&self) -> f64 {
        0.0
    }
}

/// Packs `tokens` into lines of at most `width` characters.
///
/// A token is appended to the current line while the line plus one space plus
/// the token still fits; otherwise a new line starts with it. The first token
/// of a line is always placed, so a token wider than `width` ends up alone on
/// its own line, untouched.
///
/// No tokens means no lines.
pub fn wrap_tokens(tokens: &[Token<'_>], width: usize) -> Vec<String> {
    if tokens.is_empty() {
        return vec![];
    }

    wrap_first_fit(tokens, &[width as f64])
        .into_iter()
        .map(|line| {
            line.iter()
                .map(Token::as_str)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

/// Tokenizes `text` and wraps it at `width`, joining the lines with `\n`.
///
/// Returns the empty string for text with no tokens.
pub fn wrap_paragraph(text: &str, width: usize) -> String {
    wrap_tokens(&tokenize(text), width).join("\n")
}

//! # Formatting
//!
//! Markdown-aware rewrapping of prose.
//!
//! The pipeline is: split the text into lines, segment the lines into
//! blocks ([`blocks`]), and render every block. Verbatim blocks are copied;
//! list items and paragraphs are flattened, tokenized ([`inline`]) and
//! packed into lines ([`wrap`]) under their prefix.
//!
//! Formatting is total: malformed markdown degrades to verbatim or plainly
//! wrapped output, never to an error.

pub mod blocks;
pub mod inline;
pub mod options;
pub mod wrap;

#[cfg(test)]
mod tests;

pub use options::{DEFAULT_LINE_LENGTH, FormatOptions};

use blocks::segment;

/// Rewraps the prose in `text` to `options.line_length`.
///
/// Lines are joined with `\n`; a trailing newline in the input is kept.
pub fn format_markdown(text: &str, options: &FormatOptions) -> String {
    let mut out = Vec::new();
    for block in segment(text) {
        block.render(options.line_length, &mut out);
    }
    out.join("\n")
}

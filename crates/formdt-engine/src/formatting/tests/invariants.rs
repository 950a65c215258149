use crate::formatting::{
    blocks::kinds::{BlockQuote, ListItem},
    inline::tokenize,
};

/// Validates formatter output invariants.
///
/// Asserts that:
/// - Every output line fits in `width`, unless it was copied from the input
///   or holds a single token that is wider than `width` on its own
/// - Every single-line protected span of the input survives intact on one
///   output line
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(input: &str, output: &str, width: usize) {
    for line in output.split('\n') {
        if line.chars().count() <= width || input.split('\n').any(|l| l == line) {
            continue;
        }
        let content = strip_prefix(line);
        assert!(
            tokenize(content).len() <= 1,
            "line over width {width} holds more than one token: {line:?}"
        );
    }

    for token in tokenize(input) {
        let text = token.as_str();
        if token.is_protected() && !text.contains('\n') {
            assert!(
                output.split('\n').any(|line| line.contains(text)),
                "protected span split across lines: {text:?}"
            );
        }
    }
}

fn strip_prefix(line: &str) -> &str {
    if let Some(callout) = BlockQuote::split(line) {
        return callout.content;
    }
    if let Some(marker) = ListItem::match_marker(line) {
        return marker.content;
    }
    line.trim_start()
}

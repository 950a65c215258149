use super::{
    cursor::Cursor,
    kinds::{InlineMath, Link},
    types::{SpanKind, Token},
};

/// Splits a flattened paragraph into [`Token`]s.
///
/// Protected spans (links, images, inline math) are found left to right;
/// whichever construct matches at the earliest position wins and scanning
/// resumes after it, so spans never overlap. Text before, between and after
/// spans is split on whitespace into words.
///
/// Malformed constructs simply fail to match and fall back to words. Empty
/// input yields no tokens.
pub fn tokenize(s: &str) -> Vec<Token<'_>> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = 0;

    while !cur.eof() {
        let start = cur.pos();
        if let Some(kind) = try_parse_link(&mut cur) {
            push_words(&mut out, &s[text_start..start]);
            out.push(Token::Protected {
                kind,
                text: &s[start..cur.pos()],
            });
            text_start = cur.pos();
            continue;
        }
        if let Some(kind) = try_parse_inline_math(&mut cur) {
            push_words(&mut out, &s[text_start..start]);
            out.push(Token::Protected {
                kind,
                text: &s[start..cur.pos()],
            });
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    push_words(&mut out, &s[text_start..]);
    out
}

fn push_words<'a>(out: &mut Vec<Token<'a>>, text: &'a str) {
    out.extend(text.split_whitespace().map(Token::Word));
}

/// Attempts to parse `[text](url)` or `![alt](url)` at the current position.
///
/// On failure, cursor position is restored.
fn try_parse_link(cur: &mut Cursor<'_>) -> Option<SpanKind> {
    let saved = cur.clone();

    let kind = if cur.peek() == Some(Link::IMAGE) {
        cur.bump();
        SpanKind::Image
    } else {
        SpanKind::Link
    };

    if cur.peek() != Some(Link::TEXT_OPEN) {
        *cur = saved;
        return None;
    }
    cur.bump();
    cur.bump_until(Link::TEXT_CLOSE);
    if cur.peek() != Some(Link::TEXT_CLOSE) {
        *cur = saved;
        return None;
    }
    cur.bump();

    if cur.peek() != Some(Link::URL_OPEN) {
        *cur = saved;
        return None;
    }
    cur.bump();
    let url_start = cur.pos();
    cur.bump_until(Link::URL_CLOSE);
    if cur.peek() != Some(Link::URL_CLOSE) || cur.pos() == url_start {
        *cur = saved;
        return None;
    }
    cur.bump();

    Some(kind)
}

/// Attempts to parse `$$body$$` at the current position.
///
/// The body must be non-empty and free of `$`. On failure, cursor position
/// is restored.
fn try_parse_inline_math(cur: &mut Cursor<'_>) -> Option<SpanKind> {
    if !cur.starts_with(InlineMath::DELIMITER) {
        return None;
    }

    let saved = cur.clone();
    cur.bump_n(InlineMath::DELIMITER.len());
    let body_start = cur.pos();
    cur.bump_until(InlineMath::DOLLAR);

    if cur.pos() == body_start || !cur.starts_with(InlineMath::DELIMITER) {
        *cur = saved;
        return None;
    }
    cur.bump_n(InlineMath::DELIMITER.len());

    Some(SpanKind::InlineMath)
}

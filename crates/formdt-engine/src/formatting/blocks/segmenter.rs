use super::{
    classify::{LineClass, MarkdownLineClassifier},
    kinds::{BlockQuote, CodeFence, MathFence},
    types::{Block, VerbatimKind},
};

#[derive(Debug)]
enum State<'a> {
    Scanning,
    InCodeFence {
        lines: Vec<&'a str>,
    },
    InMathFence {
        lines: Vec<&'a str>,
    },
    InProse {
        callout: Option<String>,
        lines: Vec<&'a str>,
    },
}

/// Line-by-line state machine that groups a document into [`Block`]s.
///
/// Fences are raw zones: once open, every line is content until the closing
/// delimiter. Prose lines accumulate until a terminating line arrives; the
/// terminator is not part of the paragraph and is processed as if scanning
/// had just resumed.
pub struct Segmenter<'a> {
    classifier: MarkdownLineClassifier,
    state: State<'a>,
    out: Vec<Block<'a>>,
}

impl<'a> Segmenter<'a> {
    pub fn new() -> Self {
        Self {
            classifier: MarkdownLineClassifier,
            state: State::Scanning,
            out: vec![],
        }
    }

    pub fn push(&mut self, line: &'a str) {
        match std::mem::replace(&mut self.state, State::Scanning) {
            State::Scanning => self.scan(line),
            State::InCodeFence { mut lines } => {
                lines.push(line);
                if CodeFence::is_delimiter(line) {
                    self.emit_verbatim(VerbatimKind::CodeFence, lines);
                } else {
                    self.state = State::InCodeFence { lines };
                }
            }
            State::InMathFence { mut lines } => {
                lines.push(line);
                if MathFence::is_delimiter(line) {
                    self.emit_verbatim(VerbatimKind::MathFence, lines);
                } else {
                    self.state = State::InMathFence { lines };
                }
            }
            State::InProse { callout, mut lines } => {
                if self.classifier.classify(line).ends_prose_run() {
                    self.flush_paragraph(callout, lines);
                    self.scan(line);
                    return;
                }

                // Only a run that opened inside a callout strips markers.
                let content = match (&callout, BlockQuote::split(line)) {
                    (Some(_), Some(split)) => split.content,
                    _ => line,
                };
                lines.push(content);
                self.state = State::InProse { callout, lines };
            }
        }
    }

    pub fn finish(mut self) -> Vec<Block<'a>> {
        // EOF flush
        match std::mem::replace(&mut self.state, State::Scanning) {
            State::Scanning => {}
            State::InCodeFence { lines } => {
                // Unterminated fence: emit as written
                self.emit_verbatim(VerbatimKind::CodeFence, lines);
            }
            State::InMathFence { lines } => {
                self.emit_verbatim(VerbatimKind::MathFence, lines);
            }
            State::InProse { callout, lines } => self.flush_paragraph(callout, lines),
        }
        self.out
    }

    fn scan(&mut self, line: &'a str) {
        match self.classifier.classify(line) {
            LineClass::CodeFence => {
                self.state = State::InCodeFence { lines: vec![line] };
            }
            LineClass::MathFence => {
                self.state = State::InMathFence { lines: vec![line] };
            }
            LineClass::Heading => self.emit_verbatim(VerbatimKind::Heading, vec![line]),
            LineClass::Blank => self.emit_verbatim(VerbatimKind::Blank, vec![line]),
            LineClass::ListItem(marker) => self.out.push(Block::ListItem(marker)),
            LineClass::Admonition => self.emit_verbatim(VerbatimKind::Admonition, vec![line]),
            LineClass::Callout(callout) => {
                self.state = State::InProse {
                    callout: Some(callout.prefix()),
                    lines: vec![callout.content],
                };
            }
            LineClass::Prose => {
                self.state = State::InProse {
                    callout: None,
                    lines: vec![line],
                };
            }
        }
    }

    fn emit_verbatim(&mut self, kind: VerbatimKind, lines: Vec<&'a str>) {
        self.out.push(Block::Verbatim { kind, lines });
    }

    fn flush_paragraph(&mut self, callout: Option<String>, lines: Vec<&'a str>) {
        log::trace!(
            "paragraph of {} line(s), callout prefix {:?}",
            lines.len(),
            callout
        );
        self.out.push(Block::Paragraph { callout, lines });
    }
}

impl Default for Segmenter<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Runs a whole document through a [`Segmenter`].
///
/// The text is split on `\n` only, so a trailing newline produces a final
/// empty (blank) line and `\r` stays attached to its line.
pub fn segment(text: &str) -> Vec<Block<'_>> {
    let mut segmenter = Segmenter::new();
    for line in text.split('\n') {
        segmenter.push(line);
    }
    segmenter.finish()
}

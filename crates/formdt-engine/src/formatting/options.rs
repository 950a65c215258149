/// Width used when nothing else is configured.
pub const DEFAULT_LINE_LENGTH: usize = 80;

/// Settings for one formatting call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Maximum line length in characters, prefixes included.
    pub line_length: usize,
}

impl FormatOptions {
    pub fn new(line_length: usize) -> Self {
        Self { line_length }
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self::new(DEFAULT_LINE_LENGTH)
    }
}

/// Fenced code block delimiter.
///
/// The same predicate opens and closes a fence, so an info string on the
/// closing line is tolerated.
pub struct CodeFence;

impl CodeFence {
    pub const BACKTICKS: &'static str = "```";

    pub fn is_delimiter(line: &str) -> bool {
        line.starts_with(Self::BACKTICKS)
    }
}

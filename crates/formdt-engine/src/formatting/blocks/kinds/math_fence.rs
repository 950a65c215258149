/// Display-math block delimiter (`$$` on its own line).
///
/// Leading and trailing whitespace is ignored. Anything else on the line,
/// including a complete `$$...$$` span, makes it prose.
pub struct MathFence;

impl MathFence {
    pub const DELIMITER: &'static str = "$$";

    pub fn is_delimiter(line: &str) -> bool {
        line.trim() == Self::DELIMITER
    }
}

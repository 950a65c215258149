/// ATX heading: one to six `#` followed by whitespace.
pub struct Heading;

impl Heading {
    pub const MARKER: char = '#';
    pub const MAX_LEVEL: usize = 6;

    /// Returns the heading level if `line` opens an ATX heading.
    pub fn level(line: &str) -> Option<usize> {
        let rest = line.trim_start_matches(Self::MARKER);
        let level = line.len() - rest.len();
        let followed_by_space = rest.chars().next().is_some_and(char::is_whitespace);
        ((1..=Self::MAX_LEVEL).contains(&level) && followed_by_space).then_some(level)
    }

    pub fn is_heading(line: &str) -> bool {
        Self::level(line).is_some()
    }
}

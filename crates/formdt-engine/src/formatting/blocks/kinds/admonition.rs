/// GitHub-style admonition marker such as `> [!note]`.
///
/// The marker line is always kept on its own line, unwrapped.
pub struct Admonition;

impl Admonition {
    pub const OPEN: &'static str = "[!";
    pub const CLOSE: char = ']';

    /// Returns the admonition type (`note`, `warning`, ...) if `line` carries a marker.
    pub fn kind(line: &str) -> Option<&str> {
        let after_quote = line.trim_start_matches(super::BlockQuote::PREFIX);
        if after_quote.len() == line.len() {
            return None;
        }
        let rest = after_quote.trim_start().strip_prefix(Self::OPEN)?;
        let end = rest.find(|c: char| !(c.is_alphanumeric() || c == '_'))?;
        (end > 0 && rest[end..].starts_with(Self::CLOSE)).then(|| &rest[..end])
    }

    pub fn is_marker(line: &str) -> bool {
        Self::kind(line).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("> [!note]", Some("note"))]
    #[case(">[!WARNING]", Some("WARNING"))]
    #[case(">> [!tip] trailing text", Some("tip"))]
    #[case("> [!note", None)]
    #[case("> [!]", None)]
    #[case("> [!two words]", None)]
    #[case("[!note]", None)]
    #[case("> plain quote", None)]
    fn admonition_kind(#[case] line: &str, #[case] expected: Option<&str>) {
        assert_eq!(Admonition::kind(line), expected);
    }
}

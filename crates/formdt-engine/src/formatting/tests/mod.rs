//! Integration tests for the formatting module.
//!
//! Fixtures (.md) and snapshots (.snap) are co-located in `fixtures/`.

mod invariants;

use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::formatting::{FormatOptions, format_markdown};

fn format(text: &str, width: usize) -> String {
    format_markdown(text, &FormatOptions::new(width))
}

// Fixture-based snapshot tests

#[rstest]
#[case("prose_paragraphs", 40)]
#[case("lists", 50)]
#[case("callouts", 40)]
#[case("fences", 30)]
#[case("protected_spans", 30)]
fn fixture(#[case] name: &str, #[case] width: usize) {
    let fixtures_dir = format!(
        "{}/src/formatting/tests/fixtures",
        env!("CARGO_MANIFEST_DIR")
    );
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let formatted = format(&md, width);
    invariants::check(&md, &formatted, width);

    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, formatted);
    });
}

// Behaviour tests

#[test]
fn joins_single_line_breaks() {
    assert_eq!(
        format("Line one\nLine two\nLine three", 80),
        "Line one Line two Line three"
    );
}

#[rstest]
#[case(14)]
#[case(80)]
fn preserves_blank_line_between_paragraphs(#[case] width: usize) {
    assert_eq!(
        format("Paragraph one.\n\nParagraph two.", width),
        "Paragraph one.\n\nParagraph two."
    );
}

#[test]
fn handles_multiple_consecutive_paragraphs() {
    assert_eq!(format("One.\n\nTwo.\n\nThree.", 80), "One.\n\nTwo.\n\nThree.");
}

#[test]
fn handles_empty_string() {
    assert_eq!(format("", 80), "");
}

#[test]
fn preserves_short_lines() {
    assert_eq!(format("Short line.", 80), "Short line.");
}

#[test]
fn default_options_use_80_chars() {
    assert_eq!(FormatOptions::default().line_length, 80);
    let text = "word ".repeat(30);
    for line in format_markdown(&text, &FormatOptions::default()).lines() {
        assert!(line.chars().count() <= 80);
    }
}

#[test]
fn wraps_each_paragraph_independently() {
    let result = format(
        "This is the first paragraph with words.\n\nThis is the second paragraph.",
        30,
    );
    let paragraphs: Vec<&str> = result.split("\n\n").collect();
    assert_eq!(paragraphs.len(), 2);
    for line in result.lines() {
        assert!(line.chars().count() <= 30, "{line:?}");
    }
}

#[test]
fn word_longer_than_line_length_stays_on_own_line() {
    let result = format("Short verylongwordhere end", 10);
    let lines: Vec<&str> = result.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[1], "verylongwordhere");
}

#[test]
fn list_continuations_indent_by_marker_width() {
    let result = format(
        "- **Line wrapping**: Lines are wrapped at the configured length (default: 80)",
        50,
    );
    let lines: Vec<&str> = result.lines().collect();
    assert!(lines.len() > 1);
    assert!(lines[0].starts_with("- "));
    for line in &lines[1..] {
        assert!(line.starts_with("  "));
        assert!(!line.starts_with("   "));
    }
    for line in &lines {
        assert!(line.chars().count() <= 50);
    }
}

#[test]
fn wraps_callout_with_prefix_on_continuation_lines() {
    let result = format(
        "> You must specify either `-m` (all markdown cells) or `-c` (specific cells) when formatting notebooks.",
        40,
    );
    let lines: Vec<&str> = result.lines().collect();
    assert!(lines.len() > 1);
    for line in lines {
        assert!(line.starts_with("> "));
        assert!(line.chars().count() <= 40);
    }
}

#[test]
fn preserves_short_callout() {
    assert_eq!(format("> Short callout.", 80), "> Short callout.");
}

#[test]
fn nested_callout_prefix_preserved() {
    let result = format(
        ">> This is a nested callout that should wrap properly.",
        30,
    );
    assert!(result.lines().count() > 1);
    for line in result.lines() {
        assert!(line.starts_with(">> "));
    }
}

#[test]
fn github_admonition_stays_on_own_line() {
    let result = format(
        "> [!note]\n> You must specify either `-m` (all markdown cells) or `-c` (specific cells) when formatting notebooks.",
        80,
    );
    let lines: Vec<&str> = result.lines().collect();
    assert_eq!(lines[0], "> [!note]");
    assert!(lines.len() > 2);
    for line in &lines[1..] {
        assert!(line.starts_with("> "));
    }
}

#[test]
fn github_admonition_with_text_on_same_line() {
    let result = format(
        "> [!warning] This is a warning that should stay on its own line.\n> More content here.",
        80,
    );
    let lines: Vec<&str> = result.lines().collect();
    assert!(lines[0].starts_with("> [!warning]"));
    assert!(!lines[1].contains("[!warning]"));
    assert_eq!(lines[1], "> More content here.");
}

#[test]
fn badge_image_fits_unchanged() {
    let text = "![Tests Passing](https://github.com/example/formdt/actions/workflows/test.yml/badge.svg)";
    assert!(text.chars().count() <= 88);
    assert_eq!(format(text, 88), text);
}

#[test]
fn links_stay_intact_across_wrap() {
    let text = "Check out [this documentation](https://example.com/very/long/path/to/docs) for more info.";
    let result = format(text, 40);
    assert!(result.contains("[this documentation](https://example.com/very/long/path/to/docs)"));

    let result = format("See [link](https://example.com) here.", 30);
    assert!(result.contains("[link](https://example.com)"));
}

#[test]
fn code_fence_contents_ignore_width() {
    let text = "```\nthis line is far too long for the width but is code\n```";
    assert_eq!(format(text, 10), text);
}

#[test]
fn math_fence_contents_ignore_width() {
    let text = "$$\n\\sum_{i=0}^{n} i = \\frac{n(n+1)}{2}\n$$";
    assert_eq!(format(text, 5), text);
}

#[test]
fn single_line_display_math_wraps_as_one_token() {
    assert_eq!(
        format("Before\n$$x + y$$\nafter", 80),
        "Before $$x + y$$ after"
    );
}

#[test]
fn prose_starting_with_inline_math_still_wraps() {
    assert_eq!(
        format(
            "$$x$$ is small and this line is long enough to wrap at twenty\n\n\
             this paragraph should also wrap at twenty cols",
            20,
        ),
        "$$x$$ is small and\nthis line is long\nenough to wrap at\ntwenty\n\n\
         this paragraph\nshould also wrap at\ntwenty cols"
    );
}

#[test]
fn bare_quote_line_keeps_its_prefix() {
    assert_eq!(format("> first\n\n> \n\nafter", 80), "> first\n\n> \n\nafter");
}

#[test]
fn headings_are_never_wrapped() {
    let heading = "## A heading that is much longer than the configured width";
    assert_eq!(format(heading, 20), heading);
}

#[test]
fn trailing_newline_is_preserved() {
    assert_eq!(format("one\ntwo\n", 80), "one two\n");
}

#[test]
fn formatting_is_idempotent_without_lists() {
    let text = "# Title\n\nSome prose that will wrap at a narrow width for sure.\n\n\
                > quoted text that also needs wrapping here\n\n\
                ```\ncode stays\n```";
    let once = format(text, 24);
    assert_eq!(format(&once, 24), once);
}

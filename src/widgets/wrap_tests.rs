//! Tests for wrap_text

use super::*;
use proptest::prelude::*;

#[test]
fn test_short_text_is_single_line() {
    assert_eq!(wrap_text("Try Munnar and Wayanad.", 40), vec!["Try Munnar and Wayanad."]);
}

#[test]
fn test_wraps_at_word_boundaries() {
    assert_eq!(
        wrap_text("Try Munnar and Wayanad.", 12),
        vec!["Try Munnar", "and Wayanad."]
    );
}

#[test]
fn test_keeps_explicit_newlines_and_blank_lines() {
    assert_eq!(
        wrap_text("Day 1: Jaipur\n\nDay 2: Udaipur", 40),
        vec!["Day 1: Jaipur", "", "Day 2: Udaipur"]
    );
}

#[test]
fn test_breaks_long_words() {
    assert_eq!(wrap_text("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
}

#[test]
fn test_wide_chars_count_double() {
    // Each CJK char is 2 columns wide
    assert_eq!(wrap_text("日本語", 4), vec!["日本", "語"]);
}

#[test]
fn test_zero_width_returns_raw_lines() {
    assert_eq!(wrap_text("a b\nc", 0), vec!["a b", "c"]);
}

// No wrapped line exceeds the requested width, and no words are lost.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_lines_fit_width(text in "[a-z ]{0,200}", width in 1usize..60) {
        let lines = wrap_text(&text, width);

        for line in &lines {
            prop_assert!(line.width() <= width, "line {:?} wider than {}", line, width);
        }

        let original: String = text.split_whitespace().collect();
        let wrapped: String = lines.iter().flat_map(|l| l.split_whitespace()).collect();
        prop_assert_eq!(original, wrapped);
    }
}

//! Width-aware text helpers for laying out cards in the terminal.
//!
//! All widths are Unicode display widths, so CJK and emoji content lines
//! up the same as ASCII.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Clips a string to the given display width, appending "..." when
/// anything was cut (and the width leaves room for it).
pub fn clip_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width < 3 {
        return take_width(s, max_width);
    }
    format!("{}...", take_width(s, max_width - 3))
}

/// Greedy word wrap to the given display width.
///
/// A single word wider than the width is hard-broken at the width
/// boundary. Always yields at least one (possibly empty) line.
pub fn wrap_to_width(s: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![String::new()];
    }

    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in s.split_whitespace() {
        let mut word = word.to_string();
        let space = usize::from(line_width > 0);

        if line_width + space + word.width() > width {
            if line_width > 0 {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            // Hard-break words that cannot fit on a line of their own.
            while word.width() > width {
                let head = take_width(&word, width);
                word = word[head.len()..].to_string();
                lines.push(head);
            }
        }

        if line_width > 0 {
            line.push(' ');
            line_width += 1;
        }
        line_width += word.width();
        line.push_str(&word);
    }

    lines.push(line);
    lines
}

/// Longest prefix of `s` that fits in `max_width` display columns.
fn take_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width {
            break;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::fits("hello", 10, "hello")]
    #[case::exact("hello", 5, "hello")]
    #[case::clipped("hello world", 8, "hello...")]
    #[case::too_narrow_for_ellipsis("hello", 2, "he")]
    #[case::zero("hello", 0, "")]
    #[case::empty("", 5, "")]
    #[case::cjk("日本語テスト", 7, "日本...")]
    fn test_clip_to_width(#[case] input: &str, #[case] width: usize, #[case] expected: &str) {
        assert_eq!(clip_to_width(input, width), expected);
    }

    #[rstest]
    #[case::single_line("a cool project", 20, vec!["a cool project"])]
    #[case::wraps_at_word_boundary("a longer project description", 10, vec!["a longer", "project", "descriptio", "n"])]
    #[case::collapses_whitespace("two   words", 20, vec!["two words"])]
    #[case::empty("", 10, vec![""])]
    #[case::cjk_counts_double_width("日本 語語", 4, vec!["日本", "語語"])]
    fn test_wrap_to_width(#[case] input: &str, #[case] width: usize, #[case] expected: Vec<&str>) {
        assert_eq!(wrap_to_width(input, width), expected);
    }

    #[test]
    fn wrap_hard_breaks_oversized_words() {
        assert_eq!(
            wrap_to_width("https://example.com/long", 8),
            vec!["https://", "example.", "com/long"]
        );
    }

    #[test]
    fn wrap_with_zero_width_yields_one_empty_line() {
        assert_eq!(wrap_to_width("anything", 0), vec![""]);
    }
}

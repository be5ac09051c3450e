//! Display-width aware word wrapping
//!
//! Explicit newlines in the text are kept (the response panel shows answers
//! pre-wrapped), and long words are broken at the column limit.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Wrap `text` so that no line is wider than `max_width` display columns
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    if max_width == 0 {
        return text.lines().map(str::to_string).collect();
    }

    let mut lines = Vec::new();
    for paragraph in text.split('\n') {
        wrap_paragraph(paragraph.trim_end_matches('\r'), max_width, &mut lines);
    }
    lines
}

fn wrap_paragraph(paragraph: &str, max_width: usize, lines: &mut Vec<String>) {
    if paragraph.trim().is_empty() {
        lines.push(String::new());
        return;
    }

    let mut current = String::new();
    let mut current_width = 0;

    for word in paragraph.split_whitespace() {
        let word_width = word.width();
        let separator = usize::from(!current.is_empty());

        if current_width + separator + word_width <= max_width {
            if separator == 1 {
                current.push(' ');
            }
            current.push_str(word);
            current_width += separator + word_width;
            continue;
        }

        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= max_width {
            current.push_str(word);
            current_width = word_width;
        } else {
            for ch in word.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if current_width + ch_width > max_width && !current.is_empty() {
                    lines.push(std::mem::take(&mut current));
                    current_width = 0;
                }
                current.push(ch);
                current_width += ch_width;
            }
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }
}

#[cfg(test)]
#[path = "wrap_tests.rs"]
mod wrap_tests;

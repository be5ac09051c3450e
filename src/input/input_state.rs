use ratatui::style::{Color, Style};
use tui_textarea::{CursorMove, TextArea};

pub const INPUT_PLACEHOLDER: &str = "Ask about places to visit in India...";

/// Single-line question input
pub struct InputState {
    pub textarea: TextArea<'static>,
}

impl InputState {
    pub fn new() -> Self {
        Self {
            textarea: build_textarea(String::new()),
        }
    }

    pub fn query(&self) -> &str {
        self.textarea.lines().first().map(String::as_str).unwrap_or("")
    }

    pub fn is_empty(&self) -> bool {
        self.query().is_empty()
    }

    /// Replace the text, leaving the cursor at the end
    pub fn set_query(&mut self, text: &str) {
        self.textarea = build_textarea(text.to_string());
    }

    pub fn clear(&mut self) {
        self.set_query("");
    }
}

impl Default for InputState {
    fn default() -> Self {
        Self::new()
    }
}

fn build_textarea(text: String) -> TextArea<'static> {
    let mut textarea = TextArea::new(vec![text]);
    textarea.set_cursor_line_style(Style::default());
    textarea.set_placeholder_text(INPUT_PLACEHOLDER);
    textarea.set_placeholder_style(Style::default().fg(Color::DarkGray));
    textarea.move_cursor(CursorMove::End);
    textarea
}

#[cfg(test)]
#[path = "input_state_tests.rs"]
mod input_state_tests;

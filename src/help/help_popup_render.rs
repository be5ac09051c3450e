//! Help popup rendering
//!
//! This module handles rendering of the help popup modal with keyboard shortcuts.

use ratatui::{
    Frame,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::help::{HELP_ENTRIES, HELP_FOOTER};
use crate::widgets::popup;

// Help popup display constants
pub const HELP_POPUP_WIDTH: u16 = 56;
pub const HELP_POPUP_PADDING: u16 = 4; // borders (2) + footer (2)

/// Render the help popup (centered modal with keyboard shortcuts)
pub fn render_popup(frame: &mut Frame) {
    let frame_area = frame.area();

    // Don't render if terminal is too small
    if frame_area.width < 20 || frame_area.height < 6 {
        return;
    }

    let popup_height = HELP_ENTRIES.len() as u16 + HELP_POPUP_PADDING;
    let popup_area = popup::centered_popup(frame_area, HELP_POPUP_WIDTH, popup_height);

    popup::clear_area(frame, popup_area);

    let mut lines: Vec<Line> = Vec::new();

    for (key, desc) in HELP_ENTRIES {
        if key.is_empty() && desc.is_empty() {
            lines.push(Line::from(""));
        } else if key.is_empty() {
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(
                    *desc,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
        } else {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("  {:<15}", key),
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*desc, Style::default().fg(Color::White)),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.push(
        Line::from(Span::styled(HELP_FOOTER, Style::default().fg(Color::DarkGray))).centered(),
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Keybindings ")
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(Paragraph::new(lines).block(block), popup_area);
}

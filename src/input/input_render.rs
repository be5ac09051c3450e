//! Input field rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders},
};

use crate::app::App;

/// Render the question input field
pub fn render_field(app: &mut App, frame: &mut Frame, area: Rect) {
    let busy = app.ask.loading;

    let (title, border_color) = if busy {
        (" Thinking... ", Color::Yellow)
    } else {
        (" Ask ", Color::Cyan)
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .title(title)
        .border_style(Style::default().fg(border_color));

    if !busy && !app.input.is_empty() {
        block = block.title(
            Line::styled(" Enter: Ask Agent | Esc: × ", Style::default().fg(Color::DarkGray))
                .right_aligned(),
        );
    }

    // Input is disabled while a request is in flight
    let (text_style, cursor_style) = if busy {
        (Style::default().fg(Color::DarkGray), Style::default())
    } else {
        (
            Style::default().fg(Color::White),
            Style::default().add_modifier(Modifier::REVERSED),
        )
    };

    app.input.textarea.set_block(block);
    app.input.textarea.set_style(text_style);
    app.input.textarea.set_cursor_style(cursor_style);

    frame.render_widget(&app.input.textarea, area);
}

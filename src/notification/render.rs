use ratatui::{
    Frame,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::{NotificationState, NotificationStyle};
use crate::widgets::popup;

/// Draw the current notification in the top-right corner, if any
pub fn render_notification(frame: &mut Frame, state: &mut NotificationState) {
    let Some(notification) = state.current() else {
        return;
    };

    let color = match notification.style {
        NotificationStyle::Info => Color::Cyan,
        NotificationStyle::Warning => Color::Yellow,
    };

    // borders (2) + one space padding each side (2)
    let width = notification.message.width() as u16 + 4;
    let area = popup::top_right_popup(frame.area(), width, 3, 1);
    if area.width < 5 || area.height < 3 {
        return;
    }

    popup::clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let paragraph = Paragraph::new(format!(" {} ", notification.message))
        .style(Style::default().fg(color))
        .block(block);

    frame.render_widget(paragraph, area);
}

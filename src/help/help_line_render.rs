//! Help line rendering
//!
//! This module handles rendering of the help line at the bottom of the screen.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::Paragraph,
};

use crate::app::App;
use crate::ask::DisplayMode;

/// Hint text for the current display mode
pub fn help_text(app: &App) -> &'static str {
    match app.display_mode() {
        DisplayMode::Busy => " Thinking... | F1: Help | Ctrl+C: Quit",
        DisplayMode::Result => {
            " Enter: Ask | PgUp/PgDn: Scroll Answer | Esc: Clear | F1: Help | Ctrl+C: Quit"
        }
        DisplayMode::IdleEmpty if app.show_suggestions => {
            " Enter: Ask | Alt+1-4: Popular Question | Esc: Clear | F1: Help | Ctrl+C: Quit"
        }
        DisplayMode::IdleEmpty => " Enter: Ask | Esc: Clear | F1: Help | Ctrl+C: Quit",
    }
}

/// Render the help line (bottom of screen)
pub fn render_line(app: &App, frame: &mut Frame, area: Rect) {
    let help = Paragraph::new(help_text(app)).style(Style::default().fg(Color::DarkGray));

    frame.render_widget(help, area);
}

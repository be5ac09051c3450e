use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use crate::ask::DisplayMode;
use crate::notification::render_notification;
use crate::widgets::{popup, wrap::wrap_text};

pub const APP_TITLE: &str = "Travel India AI";
pub const APP_TAGLINE: &str = "Discover incredible destinations across India";
pub const HERO_TEXT: &str = "Where would you like to explore today?";
pub const RESPONSE_TITLE: &str = " ✨ AI Response ";
pub const LOADING_TEXT: &str = "Exploring the best recommendations for you...";
pub const LOADING_SUBTEXT: &str = "This may take a few moments";

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

impl App {
    pub fn render(&mut self, frame: &mut Frame) {
        self.frame_count = self.frame_count.wrapping_add(1);

        let layout = Layout::vertical([
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(frame.area());
        let (header_area, input_area, body_area, help_area) =
            (layout[0], layout[1], layout[2], layout[3]);

        render_header(frame, header_area);
        crate::input::input_render::render_field(self, frame, input_area);

        match self.display_mode() {
            DisplayMode::IdleEmpty => self.render_idle(frame, body_area),
            DisplayMode::Busy => self.render_loading(frame, body_area),
            DisplayMode::Result => self.render_response(frame, body_area),
        }

        crate::help::help_line_render::render_line(self, frame, help_area);

        if self.help.visible {
            crate::help::help_popup_render::render_popup(frame);
        }

        render_notification(frame, &mut self.notification);
    }

    /// Hero line plus the popular questions grid
    fn render_idle(&self, frame: &mut Frame, area: Rect) {
        let layout = Layout::vertical([Constraint::Length(2), Constraint::Min(0)]).split(area);

        let hero = Paragraph::new(Line::from(Span::styled(
            HERO_TEXT,
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(hero, layout[0]);

        if self.show_suggestions {
            crate::suggestions::suggestion_render::render_grid(&self.suggestions, frame, layout[1]);
        }
    }

    /// Spinner panel while a request is in flight
    fn render_loading(&self, frame: &mut Frame, area: Rect) {
        let block = response_block();
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let spinner = SPINNER_FRAMES[(self.frame_count as usize) % SPINNER_FRAMES.len()];
        let lines = vec![
            Line::from(vec![
                Span::styled(spinner, Style::default().fg(Color::LightRed)),
                Span::raw(" "),
                Span::styled(LOADING_TEXT, Style::default().fg(Color::White)),
            ]),
            Line::from(Span::styled(LOADING_SUBTEXT, Style::default().fg(Color::DarkGray))),
        ];

        let top_padding = inner.height.saturating_sub(lines.len() as u16) / 2;
        let text_area = Rect {
            y: inner.y + top_padding,
            height: inner.height.saturating_sub(top_padding),
            ..inner
        };

        frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), text_area);
    }

    /// Answer text, wrapped and scrollable
    fn render_response(&mut self, frame: &mut Frame, area: Rect) {
        let mut block = response_block();
        let text_area = popup::inset_rect(block.inner(area), 1, 0);

        let lines = wrap_text(&self.ask.response, text_area.width as usize);
        self.response_scroll
            .update_bounds(lines.len() as u32, text_area.height);

        if self.response_scroll.max_offset > 0 {
            block = block.title_bottom(
                Line::styled(
                    format!(
                        " {}/{} ",
                        self.response_scroll.offset + 1,
                        self.response_scroll.max_offset + 1
                    ),
                    Style::default().fg(Color::DarkGray),
                )
                .right_aligned(),
            );
        }
        frame.render_widget(block, area);

        let text: Vec<Line> = lines
            .into_iter()
            .map(|line| Line::from(Span::styled(line, Style::default().fg(Color::White))))
            .collect();

        let paragraph = Paragraph::new(text).scroll((self.response_scroll.offset, 0));
        frame.render_widget(paragraph, text_area);
    }
}

fn response_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(RESPONSE_TITLE)
        .border_style(Style::default().fg(Color::Green))
}

/// Branding header: title, tagline, and badge
fn render_header(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::LightRed))
        .title(
            Line::styled(" ✨ AI-Powered ", Style::default().fg(Color::Yellow)).right_aligned(),
        );

    let lines = vec![
        Line::from(vec![
            Span::raw(" 📍 "),
            Span::styled(
                APP_TITLE,
                Style::default()
                    .fg(Color::LightRed)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            format!("    {}", APP_TAGLINE),
            Style::default().fg(Color::Gray),
        )),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;

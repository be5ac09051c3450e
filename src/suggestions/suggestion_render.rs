//! Suggestion grid rendering
//!
//! Lays the popular questions out as a grid of bordered cards, each tinted with
//! its category color. The highlighted card gets a thick border.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
};

use super::{GRID_COLUMNS, SUGGESTIONS, Suggestion, SuggestionState};

pub const GRID_TITLE: &str = " Popular Questions ";

/// Render the suggestion grid into `area`
pub fn render_grid(state: &SuggestionState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(GRID_TITLE)
        .title_alignment(Alignment::Center)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = SUGGESTIONS.len().div_ceil(GRID_COLUMNS);
    let row_areas = Layout::vertical(vec![Constraint::Ratio(1, rows as u32); rows]).split(inner);

    for (row, row_area) in row_areas.iter().enumerate() {
        let cell_areas =
            Layout::horizontal(vec![Constraint::Ratio(1, GRID_COLUMNS as u32); GRID_COLUMNS])
                .split(*row_area);

        for (col, cell_area) in cell_areas.iter().enumerate() {
            let index = row * GRID_COLUMNS + col;
            if let Some(suggestion) = SUGGESTIONS.get(index) {
                let selected = state.selected() == Some(index);
                render_card(frame, *cell_area, index, suggestion, selected);
            }
        }
    }
}

fn render_card(frame: &mut Frame, area: Rect, index: usize, suggestion: &Suggestion, selected: bool) {
    let mut border_style = Style::default().fg(suggestion.color);
    if selected {
        border_style = border_style.add_modifier(Modifier::BOLD);
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(if selected {
            BorderType::Thick
        } else {
            BorderType::Rounded
        })
        .border_style(border_style);

    let mut label_style = Style::default().fg(Color::White).add_modifier(Modifier::BOLD);
    if selected {
        label_style = label_style.fg(suggestion.color);
    }

    let lines = vec![
        Line::from(vec![
            Span::styled(suggestion.icon, Style::default().fg(suggestion.color)),
            Span::raw("  "),
            Span::styled(suggestion.label, label_style),
        ]),
        Line::from(Span::styled(
            format!("Alt+{}", index + 1),
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let card = Paragraph::new(lines)
        .block(block)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });

    frame.render_widget(card, area);
}

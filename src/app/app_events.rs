use std::io;
use std::time::Duration;

use ratatui::crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app_state::App;
use crate::ask::DisplayMode;

/// How long to wait for input before redrawing (spinner frame, worker poll)
pub const TICK_RATE: Duration = Duration::from_millis(80);

impl App {
    /// Wait up to one tick for a terminal event and handle it
    pub fn handle_events(&mut self) -> io::Result<()> {
        if !event::poll(TICK_RATE)? {
            return Ok(());
        }

        match event::read()? {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                self.handle_key_event(key_event);
            }
            Event::Paste(text) if !self.ask.loading => {
                // Single-line input: fold pasted newlines into spaces
                let text = text.replace(['\r', '\n'], " ");
                self.input.textarea.insert_str(text);
            }
            _ => {}
        }
        Ok(())
    }

    /// Handle key press events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if self.help.visible {
            // Help popup swallows everything but its close keys
            if matches!(key.code, KeyCode::F(1) | KeyCode::Esc | KeyCode::Char('q')) {
                self.help.close();
            }
            return;
        }

        if self.handle_global_keys(key) {
            return;
        }

        if key.modifiers.contains(KeyModifiers::ALT) {
            self.handle_suggestion_key(key);
            return;
        }

        if self.handle_scroll_key(key) {
            return;
        }

        self.handle_input_key(key);
    }

    /// Keys that work in every mode. Returns true if handled.
    fn handle_global_keys(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q') if ctrl => {
                self.should_quit = true;
                true
            }
            KeyCode::F(1) => {
                self.help.toggle();
                true
            }
            _ => false,
        }
    }

    /// Alt+1..4 picks, Alt+Arrows move, Alt+Enter picks the highlighted card
    fn handle_suggestion_key(&mut self, key: KeyEvent) {
        if !self.show_suggestions || self.display_mode() != DisplayMode::IdleEmpty {
            return;
        }

        match key.code {
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                self.pick_suggestion(index);
            }
            KeyCode::Up => self.suggestions.move_up(),
            KeyCode::Down => self.suggestions.move_down(),
            KeyCode::Left => self.suggestions.move_left(),
            KeyCode::Right => self.suggestions.move_right(),
            KeyCode::Enter => {
                if let Some(index) = self.suggestions.selected() {
                    self.pick_suggestion(index);
                }
            }
            _ => {}
        }
    }

    /// Response panel scrolling. Returns true if handled.
    fn handle_scroll_key(&mut self, key: KeyEvent) -> bool {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::PageDown => self.response_scroll.page_down(),
            KeyCode::PageUp => self.response_scroll.page_up(),
            KeyCode::Home if ctrl => self.response_scroll.jump_to_top(),
            KeyCode::End if ctrl => self.response_scroll.jump_to_bottom(),
            _ => return false,
        }
        true
    }

    /// Submit, clear, or edit the question
    fn handle_input_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => {
                if !self.ask.loading {
                    self.submit();
                }
            }
            KeyCode::Esc => {
                if !self.ask.loading {
                    self.clear_input();
                }
            }
            // tui-textarea treats these as newline
            KeyCode::Char('m') | KeyCode::Char('j')
                if key.modifiers.contains(KeyModifiers::CONTROL) => {}
            _ => {
                // Input is disabled while a request is in flight
                if !self.ask.loading {
                    self.input.textarea.input(key);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;

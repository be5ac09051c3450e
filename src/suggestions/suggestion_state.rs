use super::SUGGESTIONS;

/// Cards per row in the suggestion grid
pub const GRID_COLUMNS: usize = 2;

/// Keyboard selection within the suggestion grid
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SuggestionState {
    selected: Option<usize>,
}

impl SuggestionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn select(&mut self, index: usize) {
        if index < SUGGESTIONS.len() {
            self.selected = Some(index);
        }
    }

    pub fn move_right(&mut self) {
        self.step(|i| if i % GRID_COLUMNS + 1 < GRID_COLUMNS { i + 1 } else { i });
    }

    pub fn move_left(&mut self) {
        self.step(|i| if i % GRID_COLUMNS > 0 { i - 1 } else { i });
    }

    pub fn move_down(&mut self) {
        self.step(|i| {
            if i + GRID_COLUMNS < SUGGESTIONS.len() {
                i + GRID_COLUMNS
            } else {
                i
            }
        });
    }

    pub fn move_up(&mut self) {
        self.step(|i| i.checked_sub(GRID_COLUMNS).unwrap_or(i));
    }

    /// First move with nothing selected lands on the first card
    fn step(&mut self, next: impl Fn(usize) -> usize) {
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => next(i),
        });
    }
}

#[cfg(test)]
#[path = "suggestion_state_tests.rs"]
mod suggestion_state_tests;

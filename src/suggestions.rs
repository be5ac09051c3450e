mod suggestion_state;
pub mod suggestion_render;

pub use suggestion_state::{GRID_COLUMNS, SuggestionState};

use ratatui::style::Color;

/// A canned example question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Suggestion {
    pub label: &'static str,
    pub color: Color,
    pub icon: &'static str,
}

/// The popular questions offered before anything has been asked
pub const SUGGESTIONS: [Suggestion; 4] = [
    Suggestion {
        label: "Best hill stations in Kerala",
        color: Color::Green,
        icon: "⛰",
    },
    Suggestion {
        label: "Hidden gems in Rajasthan",
        color: Color::Magenta,
        icon: "📷",
    },
    Suggestion {
        label: "Street food tour in Mumbai",
        color: Color::LightRed,
        icon: "☕",
    },
    Suggestion {
        label: "Backpacking routes in Himachal",
        color: Color::Blue,
        icon: "🧭",
    },
];

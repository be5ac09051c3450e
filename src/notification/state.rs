use std::time::{Duration, Instant};

/// How long a notification stays on screen
pub const DEFAULT_DURATION: Duration = Duration::from_millis(2500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationStyle {
    Info,
    Warning,
}

#[derive(Debug, Clone)]
pub struct Notification {
    pub message: String,
    pub style: NotificationStyle,
    created_at: Instant,
    duration: Duration,
}

impl Notification {
    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= self.duration
    }
}

/// Holds at most one notification; a new one replaces the old
#[derive(Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
}

impl NotificationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, message: &str) {
        self.show_with(message, NotificationStyle::Info, DEFAULT_DURATION);
    }

    pub fn show_warning(&mut self, message: &str) {
        self.show_with(message, NotificationStyle::Warning, DEFAULT_DURATION * 2);
    }

    pub fn show_with(&mut self, message: &str, style: NotificationStyle, duration: Duration) {
        self.current = Some(Notification {
            message: message.to_string(),
            style,
            created_at: Instant::now(),
            duration,
        });
    }

    /// Current notification, dropping it first if it has expired
    pub fn current(&mut self) -> Option<&Notification> {
        if self.current.as_ref().is_some_and(Notification::is_expired) {
            self.current = None;
        }
        self.current.as_ref()
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod state_tests;

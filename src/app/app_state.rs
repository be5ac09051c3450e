use std::sync::mpsc;
use std::thread::JoinHandle;

use tokio_util::sync::CancellationToken;

use crate::ask::worker::spawn_worker;
use crate::ask::{AskState, DisplayMode, QueryClient};
use crate::config::Config;
use crate::help::HelpPopupState;
use crate::input::InputState;
use crate::notification::NotificationState;
use crate::scroll::ScrollState;
use crate::suggestions::{SUGGESTIONS, SuggestionState};

/// Application state
pub struct App {
    pub input: InputState,
    pub ask: AskState,
    pub suggestions: SuggestionState,
    pub help: HelpPopupState,
    pub notification: NotificationState,
    pub response_scroll: ScrollState,
    /// Show the popular questions grid while idle
    pub show_suggestions: bool,
    pub endpoint: String,
    pub frame_count: u64,
    pub should_quit: bool,
    worker: Option<Worker>,
}

struct Worker {
    cancel: CancellationToken,
    handle: JoinHandle<()>,
}

impl App {
    /// Create an App with no worker attached
    ///
    /// Submits settle immediately with the fallback message until channels are
    /// set on `ask`.
    pub fn new(config: &Config) -> Self {
        Self {
            input: InputState::new(),
            ask: AskState::new(),
            suggestions: SuggestionState::new(),
            help: HelpPopupState::new(),
            notification: NotificationState::new(),
            response_scroll: ScrollState::new(),
            show_suggestions: config.ui.show_suggestions,
            endpoint: config.endpoint.url.clone(),
            frame_count: 0,
            should_quit: false,
            worker: None,
        }
    }

    /// Create an App backed by a query worker thread
    pub fn with_worker(config: &Config, client: QueryClient) -> Self {
        let mut app = Self::new(config);
        app.endpoint = client.endpoint().to_string();

        let (request_tx, request_rx) = mpsc::channel();
        let (response_tx, response_rx) = mpsc::channel();
        let cancel = CancellationToken::new();
        let handle = spawn_worker(client, request_rx, response_tx, cancel.clone());

        app.ask.set_channels(request_tx, response_rx);
        app.worker = Some(Worker { cancel, handle });
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Current question text
    pub fn query(&self) -> &str {
        self.input.query()
    }

    pub fn display_mode(&self) -> DisplayMode {
        self.ask.display_mode()
    }

    /// Submit the current question. Returns true if a request was dispatched.
    pub fn submit(&mut self) -> bool {
        if self.query().trim().is_empty() || self.ask.has_in_flight_request() {
            return false;
        }

        let question = self.query().to_string();
        let dispatched = self.ask.submit(&question);
        self.notification.clear();
        self.response_scroll.reset();
        self.suggestions.clear_selection();
        dispatched
    }

    /// Overwrite the question with a suggestion's label. Never submits.
    pub fn pick_suggestion(&mut self, index: usize) -> bool {
        let Some(suggestion) = SUGGESTIONS.get(index) else {
            return false;
        };
        self.input.set_query(suggestion.label);
        self.suggestions.select(index);
        self.notification.show(&format!("Picked: {}", suggestion.label));
        true
    }

    /// Clear the question; no-op when it is already empty
    pub fn clear_input(&mut self) -> bool {
        if self.input.is_empty() {
            return false;
        }
        self.input.clear();
        true
    }

    /// Pull any settled response from the worker
    pub fn poll_response(&mut self) -> bool {
        self.ask.poll_response()
    }

    /// Abort any in-flight request and stop the worker thread
    pub fn shutdown(&mut self) {
        self.ask.request_tx = None;
        if let Some(worker) = self.worker.take() {
            worker.cancel.cancel();
            if worker.handle.join().is_err() {
                log::error!("Query worker thread panicked");
            }
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.shutdown();
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;

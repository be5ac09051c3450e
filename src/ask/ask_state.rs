//! Question/answer state
//!
//! Holds the last response text, the busy flag, and the channel handles used to
//! talk to the worker thread. Every dispatched request carries an id so replies
//! that are no longer current get dropped.

use std::sync::mpsc::{Receiver, Sender, TryRecvError};

use super::FALLBACK_MESSAGE;

/// Request messages sent to the worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AskRequest {
    /// Ask the endpoint a question
    Query {
        question: String,
        /// Unique ID for this request, used to filter stale responses
        request_id: u64,
    },
}

/// Response messages received from the worker thread
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AskResponse {
    /// The endpoint answered
    Answered { text: String, request_id: u64 },
    /// The request failed; `error` is for logs, never shown
    Failed { error: String, request_id: u64 },
}

impl AskResponse {
    pub fn request_id(&self) -> u64 {
        match self {
            AskResponse::Answered { request_id, .. } | AskResponse::Failed { request_id, .. } => {
                *request_id
            }
        }
    }
}

/// What the main panel shows, derived from response text and busy flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Nothing asked yet (or an empty answer): suggestion grid
    IdleEmpty,
    /// Request in flight: spinner
    Busy,
    /// Answer or fallback text
    Result,
}

/// Question/answer state
#[derive(Debug, Default)]
pub struct AskState {
    /// Text of the last settled request (answer or fallback)
    pub response: String,
    /// True strictly between dispatch and settle
    pub loading: bool,
    /// Incremented for each dispatched request
    pub request_id: u64,
    /// ID of the request whose reply is still awaited
    pub in_flight_request_id: Option<u64>,
    /// Channel to send requests to the worker thread
    pub request_tx: Option<Sender<AskRequest>>,
    /// Channel to receive responses from the worker thread
    pub response_rx: Option<Receiver<AskResponse>>,
}

impl AskState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the channel handles for communication with the worker thread
    pub fn set_channels(
        &mut self,
        request_tx: Sender<AskRequest>,
        response_rx: Receiver<AskResponse>,
    ) {
        self.request_tx = Some(request_tx);
        self.response_rx = Some(response_rx);
    }

    pub fn display_mode(&self) -> DisplayMode {
        if self.loading {
            DisplayMode::Busy
        } else if self.response.is_empty() {
            DisplayMode::IdleEmpty
        } else {
            DisplayMode::Result
        }
    }

    /// Submit a question
    ///
    /// Blank questions and submits while a request is in flight are ignored and
    /// leave the state untouched. Returns true if a request was dispatched.
    /// If the worker can't be reached the cycle settles at once with the
    /// fallback message.
    pub fn submit(&mut self, question: &str) -> bool {
        if question.trim().is_empty() || self.loading {
            return false;
        }

        self.start_request();
        let request_id = self.request_id;

        let sent = self.request_tx.as_ref().is_some_and(|tx| {
            tx.send(AskRequest::Query {
                question: question.to_string(),
                request_id,
            })
            .is_ok()
        });

        if sent {
            log::debug!("Dispatched request {}", request_id);
        } else {
            log::error!("API error: query worker unavailable");
            self.fail_request();
        }
        sent
    }

    /// Drain worker responses. Returns true if the state changed.
    pub fn poll_response(&mut self) -> bool {
        let mut changed = false;

        loop {
            let Some(rx) = &self.response_rx else {
                return changed;
            };

            match rx.try_recv() {
                Ok(response) => {
                    if self.in_flight_request_id != Some(response.request_id()) {
                        log::debug!(
                            "Discarding stale response for request {} (current: {:?})",
                            response.request_id(),
                            self.in_flight_request_id
                        );
                        continue;
                    }
                    match response {
                        AskResponse::Answered { text, .. } => self.complete_request(text),
                        AskResponse::Failed { error, .. } => {
                            log::error!("API error: {}", error);
                            self.fail_request();
                        }
                    }
                    changed = true;
                }
                Err(TryRecvError::Empty) => return changed,
                Err(TryRecvError::Disconnected) => {
                    self.response_rx = None;
                    if self.loading {
                        log::error!("API error: query worker disconnected");
                        self.fail_request();
                        changed = true;
                    }
                    return changed;
                }
            }
        }
    }

    /// Mark a new request as in flight, clearing the previous response
    fn start_request(&mut self) {
        self.response.clear();
        self.loading = true;
        self.request_id = self.request_id.wrapping_add(1);
        self.in_flight_request_id = Some(self.request_id);
    }

    fn complete_request(&mut self, text: String) {
        self.response = text;
        self.loading = false;
        self.in_flight_request_id = None;
    }

    fn fail_request(&mut self) {
        self.complete_request(FALLBACK_MESSAGE.to_string());
    }

    pub fn has_in_flight_request(&self) -> bool {
        self.in_flight_request_id.is_some()
    }
}

#[cfg(test)]
#[path = "ask_state_tests.rs"]
mod ask_state_tests;

//! Question/answer cycle against the travel query endpoint
//!
//! `QueryClient` performs the HTTP call, the worker thread runs it off the UI
//! thread, and `AskState` holds the response text and busy flag the view reads.

pub mod ask_state;
pub mod client;
pub mod worker;

pub use ask_state::{AskRequest, AskResponse, AskState, DisplayMode};
pub use client::{AskError, QueryClient, QueryPayload, QueryReply};

use crate::error::TripqError;

/// Text shown in place of an answer whenever a request fails
pub const FALLBACK_MESSAGE: &str = "Oops! Something went wrong. Please try again.";

/// Run one submit cycle outside the TUI
///
/// Blank questions are ignored and return `None` without touching the network.
/// Otherwise returns the text the view would display: the answer or the fallback.
pub fn ask_blocking(client: &QueryClient, question: &str) -> Result<Option<String>, TripqError> {
    if question.trim().is_empty() {
        return Ok(None);
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    Ok(Some(runtime.block_on(client.answer(question))))
}

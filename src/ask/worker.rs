//! Query worker thread
//!
//! Runs HTTP requests on a background thread so the UI keeps drawing while a
//! question is in flight. Requests arrive over a channel, each is executed on a
//! current-thread tokio runtime, and the outcome is sent back tagged with its
//! request id.

use std::sync::mpsc::{Receiver, Sender};
use std::thread::JoinHandle;

use tokio_util::sync::CancellationToken;

use super::ask_state::{AskRequest, AskResponse};
use super::client::{AskError, QueryClient};

/// Spawn the query worker thread
///
/// The thread exits when the request channel closes or `cancel` fires. A
/// cancelled request produces no response.
pub fn spawn_worker(
    client: QueryClient,
    request_rx: Receiver<AskRequest>,
    response_tx: Sender<AskResponse>,
    cancel: CancellationToken,
) -> JoinHandle<()> {
    std::thread::spawn(move || {
        worker_loop(client, request_rx, response_tx, cancel);
    })
}

/// Main worker loop - processes requests until the channel is closed
fn worker_loop(
    client: QueryClient,
    request_rx: Receiver<AskRequest>,
    response_tx: Sender<AskResponse>,
    cancel: CancellationToken,
) {
    let runtime = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            log::error!("Failed to start query runtime: {}", e);
            fail_all(&request_rx, &response_tx, &e.to_string());
            return;
        }
    };

    while let Ok(request) = request_rx.recv() {
        match request {
            AskRequest::Query {
                question,
                request_id,
            } => {
                let outcome = runtime.block_on(async {
                    tokio::select! {
                        biased;
                        _ = cancel.cancelled() => Err(AskError::Cancelled),
                        result = client.ask(&question) => result,
                    }
                });

                let response = match outcome {
                    Ok(text) => AskResponse::Answered { text, request_id },
                    Err(AskError::Cancelled) => {
                        log::debug!("Cancelled request {}", request_id);
                        break;
                    }
                    Err(e) => AskResponse::Failed {
                        error: e.to_string(),
                        request_id,
                    },
                };

                if response_tx.send(response).is_err() {
                    // Main thread gone
                    break;
                }
            }
        }
    }

    log::debug!("Query worker thread shutting down");
}

/// Answer every request with a failure when no runtime is available
fn fail_all(request_rx: &Receiver<AskRequest>, response_tx: &Sender<AskResponse>, error: &str) {
    while let Ok(AskRequest::Query { request_id, .. }) = request_rx.recv() {
        let failed = AskResponse::Failed {
            error: error.to_string(),
            request_id,
        };
        if response_tx.send(failed).is_err() {
            return;
        }
    }
}

#[cfg(test)]
#[path = "worker_tests.rs"]
mod worker_tests;

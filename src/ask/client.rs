//! HTTP client for the `/query` endpoint
//!
//! Sends `{"question": ...}` as JSON and reads the `response` field of the reply.
//! The status code is not inspected: a body that parses is an answer.

use reqwest::header::CONTENT_TYPE;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::FALLBACK_MESSAGE;
use crate::error::TripqError;

/// Errors that can occur while asking a question
#[derive(Debug, Error)]
pub enum AskError {
    /// Transport failure: connection refused, DNS, reset, body read
    #[error("Network error: {0}")]
    Network(String),

    /// Reply body was not the expected JSON shape
    #[error("Parse error: {0}")]
    Parse(String),

    /// Request aborted because the app is shutting down
    #[error("Request cancelled")]
    Cancelled,
}

/// Request body
#[derive(Debug, Serialize)]
pub struct QueryPayload<'a> {
    pub question: &'a str,
}

/// Reply body
#[derive(Debug, Deserialize)]
pub struct QueryReply {
    pub response: String,
    #[serde(default)]
    pub error: Option<String>,
}

impl QueryReply {
    /// The `response` field verbatim. A reported `error` is only logged.
    pub fn into_text(self) -> String {
        if let Some(error) = self.error.as_deref().filter(|e| !e.is_empty()) {
            log::warn!("Endpoint reported error: {}", error);
        }
        self.response
    }
}

/// Client for a single query endpoint
#[derive(Debug, Clone)]
pub struct QueryClient {
    client: reqwest::Client,
    endpoint: String,
}

impl QueryClient {
    /// Create a client for `endpoint`, rejecting anything that is not an absolute URL
    pub fn new(endpoint: &str) -> Result<Self, TripqError> {
        let url = reqwest::Url::parse(endpoint).map_err(|e| TripqError::InvalidEndpoint {
            url: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(TripqError::InvalidEndpoint {
                url: endpoint.to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| TripqError::InvalidEndpoint {
                url: endpoint.to_string(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            endpoint: url.to_string(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Serialize the request body for `question`
    pub fn build_request_body(question: &str) -> Result<String, AskError> {
        serde_json::to_string(&QueryPayload { question }).map_err(|e| AskError::Parse(e.to_string()))
    }

    /// POST the question and return the reply's `response` field verbatim
    pub async fn ask(&self, question: &str) -> Result<String, AskError> {
        let body = Self::build_request_body(question)?;

        log::debug!("POST {} ({} bytes)", self.endpoint, body.len());

        let response = self
            .client
            .post(&self.endpoint)
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| AskError::Network(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| AskError::Network(e.to_string()))?;

        log::debug!("Reply {} ({} bytes)", status, text.len());

        let reply: QueryReply = serde_json::from_str(&text)
            .map_err(|e| AskError::Parse(format!("{} (status {})", e, status)))?;

        Ok(reply.into_text())
    }

    /// Like `ask`, but collapses every failure into the fallback message
    pub async fn answer(&self, question: &str) -> String {
        match self.ask(question).await {
            Ok(text) => text,
            Err(e) => {
                log::error!("API error: {}", e);
                FALLBACK_MESSAGE.to_string()
            }
        }
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;

//! tripq - ask travel questions about India from your terminal
//!
//! A full-screen client for a `/query` endpoint: type a question (or pick a
//! popular one), press Enter, read the answer.

pub mod app;
pub mod ask;
pub mod config;
pub mod error;
pub mod help;
pub mod input;
pub mod logging;
pub mod notification;
pub mod scroll;
pub mod suggestions;
pub mod widgets;

#[cfg(test)]
mod test_utils;

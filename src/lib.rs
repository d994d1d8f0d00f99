//! actpulse - client for the legislative-comment sentiment API
//!
//! The library holds the API client and the pure helpers behind each
//! dashboard view; the `actpulse` binary renders them as terminal text.

pub mod acts;
pub mod adapters;
pub mod cli;
pub mod cli_output;
pub mod client;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod health_check;
pub mod models;
pub mod selection;
pub mod sentiment;
pub mod submission;
pub mod traits;

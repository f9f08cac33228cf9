//! # giraffe
//!
//! Presentation layer over `giraffe-core`: CLI, interactive prompt and HTTP API.
//! Exposed as a library so integration tests can drive the router directly.

pub mod api;
pub mod cli;
pub mod config;
pub mod present;
pub mod repl;

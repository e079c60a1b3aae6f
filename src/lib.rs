//! # taskdeck
//!
//! Client library for the task/login HTTP API: a session-context
//! [`api::ApiClient`] issuing the requests, a pluggable
//! [`store::TokenStore`] persisting the authority token between runs,
//! and a [`display::DisplayBuffer`] rendering raw JSON responses for
//! inspection. The `taskdeck` binary wires these to a command-line
//! surface.

pub mod api;
pub mod display;
pub mod store;
pub mod types;

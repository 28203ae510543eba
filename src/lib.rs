//! Event list browser (evlist)
//!
//! TUI application for browsing paginated, filterable event records served
//! by a remote HTTP API.
//!
//! Follows a Pure Core / Impure Shell architecture: `model` and `state` are
//! pure data and transitions, `fetch` and `view` own the network, the
//! async runtime and the terminal.

pub mod config;
pub mod fetch;
pub mod logging;
pub mod model;
pub mod state;
pub mod view;

#[cfg(test)]
mod tests;

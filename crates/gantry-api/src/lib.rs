//! Gantry-api: HTTP API layer for Gantry
//!
//! Serves fee quotes, chain registry data, and the network guard to the
//! bridge front-end.

pub mod dto;
pub mod routes;
pub mod server;
pub mod state;

pub use server::*;
pub use state::AppState;

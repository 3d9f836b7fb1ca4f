//! Guidance API — progress evaluation and route guidance for the career assistant.

pub mod config;
pub mod errors;
pub mod progress;
pub mod routes;
pub mod state;

//! bizcard - an animated business card for the terminal.
//!
//! The library holds everything but the event loop so integration tests and
//! benchmarks can drive the card with a fake clock and an in-memory backend.

pub mod animation;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod preview;
pub mod terminal;
pub mod theme;
pub mod ui;

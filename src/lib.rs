//! # Drop Four
//!
//! A Connect Four variant for the terminal: human vs. human on one keyboard,
//! or human vs. a randomized computer opponent. The rule engine is a small
//! explicit state machine that suspends while the front end animates each
//! drop, then resumes to check for a win and advance the turn.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, session data
//! - [`engine`] — The turn-driving state machine and its collaborator trait
//! - [`ai`] — Opponent seam and the randomized computer opponent
//! - [`ui`] — Terminal UI: board view, drop animation, input handling
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod ai;
pub mod config;
pub mod engine;
pub mod error;
pub mod game;
pub mod ui;

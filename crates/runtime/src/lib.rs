//! # Penguin Runtime
//!
//! Headless driver for the penguin scenario: parse the command line, build
//! the environment, roll out episodes with the chosen policy and log how each
//! one went.

#![deny(clippy::all, clippy::pedantic)]

pub mod app;
pub mod cli;

//! Common test utilities for the theme generator.
//!
//! - `cli`: CLI runner with output verification and fluent assertions
//! - `fixtures`: temporary workspaces seeded with color definitions
//! - `assertions`: JSON and terminal-output assertion helpers
#![allow(dead_code)]

pub mod cli;

use tracing_subscriber::EnvFilter;

pub fn init_test_logging() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

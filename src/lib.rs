//! Everforest theme generator for the Zed editor.
//!
//! This library exposes the generator behind the `everforest` CLI for use in
//! tests and other tooling.
//!
//! # Modules
//!
//! - `palette`: color definitions and per-variant palettes
//! - `theme`: the role table, palette → style mapping, and theme file layout
//! - `generate`: all-or-nothing generation of theme files
//! - `config`: resolved run configuration
//! - `cli`: command-line arguments
//! - `output`: human and robot rendering of results
//! - `error`: error types with user-facing hints
//! - `logging`: tracing subscriber setup
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod error;
pub mod generate;
pub mod logging;
pub mod output;
pub mod palette;
pub mod theme;

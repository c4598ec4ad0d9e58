//! Zed theme construction.
//!
//! [`map`] turns a [`Palette`](crate::palette::Palette) into a
//! [`StyleDocument`] by evaluating the static role table in [`rules`].
//! [`ThemeVariant`] and [`ThemeFile`] wrap style documents into the file
//! layout Zed loads.

mod color;
mod file;
mod mapper;
pub mod rules;
mod style;

pub use color::with_alpha;
pub use file::{SCHEMA_URI, ThemeFile, ThemeVariant, theme_file_path};
pub use mapper::map;
pub use style::{Player, StyleDocument, SyntaxStyle};

//! TeleВИД: a terminal news portal about the television industry.
//!
//! [`portal`] holds the domain (articles, filtering, comments), [`app`]
//! wraps it with terminal UI state and [`ui`] draws and drives it.

pub mod app;
pub mod config;
pub mod keybindings;
pub mod portal;
pub mod theme;
pub mod ui;
pub mod util;

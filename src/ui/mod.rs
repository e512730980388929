//! Terminal User Interface module.
//!
//! # Module Structure
//!
//! - `loop_runner` - Main event loop and terminal management
//! - `input` - Keyboard input handling
//! - `render` - Page layout and overlay dispatch
//! - `header` - Brand, navigation labels and search box
//! - `articles` - Article cards
//! - `comments` - Comment thread and comment form inside a card
//! - `sidebar` - Categories, popular and about widgets
//! - `footer` - Page footer
//! - `status` - Status bar widget
//! - `help` - Keybinding overlay

mod articles;
mod comments;
mod footer;
mod header;
mod help;
mod input;
mod loop_runner;
mod render;
mod sidebar;
mod status;

pub use input::handle_input;
pub use loop_runner::{run, Action};
pub use render::render;

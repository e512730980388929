//! Text helpers shared by the UI layer.
//!
//! - **Width handling**: Unicode-aware column width and truncation
//! - **Input editing**: bounded, control-free text entry

mod text;

pub use text::{
    display_width, initial, push_input_char, truncate_start_to_width, truncate_to_width,
    wrap_text,
};

/// Maximum search query length, in characters.
pub const MAX_QUERY_LENGTH: usize = 256;

/// Maximum comment author name length, in characters.
pub const MAX_AUTHOR_LENGTH: usize = 64;

/// Maximum comment body length, in characters.
pub const MAX_COMMENT_LENGTH: usize = 2000;

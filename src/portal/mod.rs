//! News portal core: articles, search filter, comment posting and the
//! expansion toggle.
//!
//! Everything here is synchronous and in-memory. [`PortalState`] owns the
//! article list and the transient view state (query, drafts, open panel);
//! the UI layer mutates it through the transition methods and otherwise
//! only reads it.

mod comments;
mod filter;
pub mod seed;
mod state;
mod types;

pub use comments::{append_comment, new_comment, CommentIdGenerator, DraftBook};
pub use filter::{filter_articles, matches_query};
pub use state::{toggled, PortalState, POPULAR_COUNT};
pub use types::{
    Article, ArticleId, Comment, CommentDraft, CommentId, CommentRejected, DraftField, JUST_NOW,
};

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Display timestamp given to every freshly posted comment.
pub const JUST_NOW: &str = "только что";

// ============================================================================
// Identifiers
// ============================================================================

/// Stable article identifier, assigned by the seed list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ArticleId(pub u64);

/// Comment identifier, unique for the lifetime of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct CommentId(pub u64);

impl fmt::Display for ArticleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Records
// ============================================================================

/// A reader comment attached to exactly one article.
///
/// `timestamp` is display text, never a clock value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Comment {
    pub id: CommentId,
    pub author: String,
    pub content: String,
    pub timestamp: String,
}

/// A news item with its owned comment thread.
///
/// Articles only come from the seed list and only ever change by having a
/// comment appended (see [`super::append_comment`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
    pub summary: String,
    pub content: String,
    pub timestamp: String,
    pub category: String,
    pub comments: Vec<Comment>,
}

impl Article {
    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }
}

// ============================================================================
// Drafts
// ============================================================================

/// Which input of the comment form has the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DraftField {
    #[default]
    Author,
    Body,
}

impl DraftField {
    pub fn other(self) -> Self {
        match self {
            Self::Author => Self::Body,
            Self::Body => Self::Author,
        }
    }
}

/// Unsaved comment text for a single article.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentDraft {
    pub author: String,
    pub body: String,
}

impl CommentDraft {
    /// Both fields contain something other than whitespace.
    pub fn is_complete(&self) -> bool {
        !self.author.trim().is_empty() && !self.body.trim().is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.author.is_empty() && self.body.is_empty()
    }

    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Author => &self.author,
            DraftField::Body => &self.body,
        }
    }

    pub fn field_mut(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Author => &mut self.author,
            DraftField::Body => &mut self.body,
        }
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Why a comment submission left the portal untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CommentRejected {
    /// Author or body is blank.
    #[error("Комментарий не заполнен: нужны имя и текст")]
    IncompleteDraft,

    #[error("Статья {0} не найдена")]
    UnknownArticle(ArticleId),
}

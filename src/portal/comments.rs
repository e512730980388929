//! Comment creation: id allocation, per-article drafts and the immutable
//! append over the article list.

use super::types::{Article, ArticleId, Comment, CommentDraft, CommentId, JUST_NOW};
use std::collections::HashMap;
use std::sync::Arc;

// ============================================================================
// Id Allocation
// ============================================================================

/// Monotonic comment id source.
///
/// Ids only need to be unique within a run, so a counter started past the
/// largest seeded id is enough.
#[derive(Debug, Clone)]
pub struct CommentIdGenerator {
    next: u64,
}

impl CommentIdGenerator {
    /// Start after the highest comment id already present in `articles`.
    pub fn after<'a>(articles: impl IntoIterator<Item = &'a Article>) -> Self {
        let max = articles
            .into_iter()
            .flat_map(|a| a.comments.iter())
            .map(|c| c.id.0)
            .max()
            .unwrap_or(0);
        Self { next: max + 1 }
    }

    pub fn next_id(&mut self) -> CommentId {
        let id = CommentId(self.next);
        self.next += 1;
        id
    }

    pub fn peek(&self) -> CommentId {
        CommentId(self.next)
    }
}

// ============================================================================
// Drafts
// ============================================================================

/// Unsaved comment drafts, one per article.
///
/// Switching between articles never carries text from one form to another.
#[derive(Debug, Clone, Default)]
pub struct DraftBook {
    drafts: HashMap<ArticleId, CommentDraft>,
}

impl DraftBook {
    pub fn get(&self, article: ArticleId) -> Option<&CommentDraft> {
        self.drafts.get(&article)
    }

    /// Draft for `article`, created empty on first use.
    pub fn entry(&mut self, article: ArticleId) -> &mut CommentDraft {
        self.drafts.entry(article).or_default()
    }

    pub fn clear(&mut self, article: ArticleId) {
        self.drafts.remove(&article);
    }

    /// Articles with any unsent text.
    pub fn pending(&self) -> usize {
        self.drafts.values().filter(|d| !d.is_empty()).count()
    }
}

// ============================================================================
// Append
// ============================================================================

/// Build a new comment stamped with [`JUST_NOW`].
pub fn new_comment(id: CommentId, author: &str, content: &str) -> Comment {
    Comment {
        id,
        author: author.to_string(),
        content: content.to_string(),
        timestamp: JUST_NOW.to_string(),
    }
}

/// Returns a new list where `target` has `comment` appended.
///
/// Every other entry is the same `Arc` as in `articles`. Returns `None` if no
/// article has id `target`.
pub fn append_comment(
    articles: &[Arc<Article>],
    target: ArticleId,
    comment: Comment,
) -> Option<Vec<Arc<Article>>> {
    let index = articles.iter().position(|a| a.id == target)?;

    let mut updated = Article::clone(&articles[index]);
    updated.comments.push(comment);

    let mut next = articles.to_vec();
    next[index] = Arc::new(updated);
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portal::seed::seed_articles;
    use pretty_assertions::assert_eq;

    fn seeded() -> Vec<Arc<Article>> {
        seed_articles().into_iter().map(Arc::new).collect()
    }

    #[test]
    fn test_generator_starts_after_seed() {
        let articles = seed_articles();
        let mut ids = CommentIdGenerator::after(&articles);
        assert_eq!(ids.peek(), CommentId(4));
        assert_eq!(ids.next_id(), CommentId(4));
        assert_eq!(ids.next_id(), CommentId(5));
    }

    #[test]
    fn test_generator_on_empty_list_starts_at_one() {
        let mut ids = CommentIdGenerator::after(std::iter::empty::<&Article>());
        assert_eq!(ids.next_id(), CommentId(1));
    }

    #[test]
    fn test_rapid_ids_never_collide() {
        let mut ids = CommentIdGenerator::after(&seed_articles());
        let mut seen = std::collections::HashSet::new();
        for _ in 0..10_000 {
            assert!(seen.insert(ids.next_id()));
        }
    }

    #[test]
    fn test_append_only_replaces_target() {
        let articles = seeded();
        let next = append_comment(
            &articles,
            ArticleId(2),
            new_comment(CommentId(10), "Иван", "Согласен"),
        )
        .unwrap();

        assert!(Arc::ptr_eq(&articles[0], &next[0]));
        assert!(!Arc::ptr_eq(&articles[1], &next[1]));
        assert!(Arc::ptr_eq(&articles[2], &next[2]));

        assert_eq!(next[1].comments.len(), 1);
        assert_eq!(next[1].comments[0].timestamp, JUST_NOW);
        // input untouched
        assert!(articles[1].comments.is_empty());
    }

    #[test]
    fn test_append_unknown_article() {
        let articles = seeded();
        let result = append_comment(
            &articles,
            ArticleId(99),
            new_comment(CommentId(10), "a", "b"),
        );
        assert!(result.is_none());
    }

    #[test]
    fn test_draft_book_isolates_articles() {
        let mut book = DraftBook::default();
        book.entry(ArticleId(1)).author.push_str("Иван");
        assert_eq!(book.get(ArticleId(2)), None);
        assert_eq!(book.entry(ArticleId(2)).author, "");
        assert_eq!(book.get(ArticleId(1)).unwrap().author, "Иван");
        assert_eq!(book.pending(), 1);

        book.clear(ArticleId(1));
        assert_eq!(book.get(ArticleId(1)), None);
        assert_eq!(book.pending(), 0);
    }
}

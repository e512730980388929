use super::comments::{append_comment, new_comment, CommentIdGenerator, DraftBook};
use super::filter::filter_articles;
use super::seed::seed_articles;
use super::types::{Article, ArticleId, CommentDraft, CommentId, CommentRejected};
use std::sync::Arc;

/// Number of entries in the sidebar "popular" list.
pub const POPULAR_COUNT: usize = 3;

/// Next expansion state after selecting `selected`'s comment toggle.
///
/// Re-selecting the open article closes it; selecting any other article
/// opens that one instead.
pub fn toggled(current: Option<ArticleId>, selected: ArticleId) -> Option<ArticleId> {
    if current == Some(selected) {
        None
    } else {
        Some(selected)
    }
}

/// Everything the feed view knows, owned in one place.
///
/// Transitions take `&mut self`; rendering only ever borrows.
#[derive(Debug, Clone)]
pub struct PortalState {
    articles: Vec<Arc<Article>>,
    query: String,
    drafts: DraftBook,
    expanded: Option<ArticleId>,
    ids: CommentIdGenerator,
}

impl PortalState {
    pub fn new(articles: Vec<Article>) -> Self {
        let ids = CommentIdGenerator::after(&articles);
        Self {
            articles: articles.into_iter().map(Arc::new).collect(),
            query: String::new(),
            drafts: DraftBook::default(),
            expanded: None,
            ids,
        }
    }

    /// State for a fresh run, built from the built-in articles.
    pub fn seeded() -> Self {
        Self::new(seed_articles())
    }

    // ========================================================================
    // Articles
    // ========================================================================

    pub fn articles(&self) -> &[Arc<Article>] {
        &self.articles
    }

    pub fn article(&self, id: ArticleId) -> Option<&Arc<Article>> {
        self.articles.iter().find(|a| a.id == id)
    }

    /// Articles matching the current query, in feed order.
    pub fn visible_articles(&self) -> Vec<Arc<Article>> {
        filter_articles(&self.articles, &self.query)
    }

    /// Sidebar list: the leading articles of the feed, ignoring the query.
    pub fn popular(&self) -> &[Arc<Article>] {
        &self.articles[..self.articles.len().min(POPULAR_COUNT)]
    }

    // ========================================================================
    // Query
    // ========================================================================

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        tracing::debug!(query = %self.query, "Search query changed");
    }

    // ========================================================================
    // Expansion
    // ========================================================================

    pub fn expanded(&self) -> Option<ArticleId> {
        self.expanded
    }

    pub fn is_expanded(&self, id: ArticleId) -> bool {
        self.expanded == Some(id)
    }

    /// Toggle the comment panel of `id`, returning the new expansion state.
    pub fn toggle_expansion(&mut self, id: ArticleId) -> Option<ArticleId> {
        self.expanded = toggled(self.expanded, id);
        self.expanded
    }

    /// Open `id`'s panel without toggling it closed if it is already open.
    pub fn expand(&mut self, id: ArticleId) {
        self.expanded = Some(id);
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    // ========================================================================
    // Comments
    // ========================================================================

    pub fn draft(&self, id: ArticleId) -> Option<&CommentDraft> {
        self.drafts.get(id)
    }

    pub fn draft_mut(&mut self, id: ArticleId) -> &mut CommentDraft {
        self.drafts.entry(id)
    }

    pub fn drafts(&self) -> &DraftBook {
        &self.drafts
    }

    /// Whether submitting `id`'s draft would post a comment.
    pub fn can_submit(&self, id: ArticleId) -> bool {
        self.drafts.get(id).is_some_and(CommentDraft::is_complete)
    }

    /// Post the draft for `id` as a new comment.
    ///
    /// On rejection nothing changes: the article list and the draft are
    /// left as they were.
    pub fn submit_comment(&mut self, id: ArticleId) -> Result<CommentId, CommentRejected> {
        if self.article(id).is_none() {
            return Err(CommentRejected::UnknownArticle(id));
        }
        let draft = match self.drafts.get(id) {
            Some(draft) if draft.is_complete() => draft,
            _ => return Err(CommentRejected::IncompleteDraft),
        };

        let comment_id = self.ids.peek();
        let comment = new_comment(comment_id, &draft.author, &draft.body);
        let next = append_comment(&self.articles, id, comment)
            .ok_or(CommentRejected::UnknownArticle(id))?;

        self.articles = next;
        self.ids.next_id();
        self.drafts.clear(id);

        tracing::info!(article_id = %id, comment_id = %comment_id, "Comment posted");
        Ok(comment_id)
    }
}

impl Default for PortalState {
    fn default() -> Self {
        Self::seeded()
    }
}

use crate::config::Config;
use crate::keybindings::{Context, KeybindingRegistry};
use crate::portal::{Article, ArticleId, CommentRejected, DraftField, PortalState};
use crate::theme::{StyleMap, ThemeVariant};
use crate::util::{push_input_char, MAX_AUTHOR_LENGTH, MAX_COMMENT_LENGTH, MAX_QUERY_LENGTH};
use ratatui::style::Style;
use std::borrow::Cow;
use std::sync::Arc;
use tokio::time::Instant;

/// How long a status message stays in the status bar.
const STATUS_TTL_SECS: u64 = 3;

// ============================================================================
// Input Mode
// ============================================================================

/// Where typed keys go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Navigating the article list.
    Browse,
    /// Editing the search query.
    Search,
    /// Editing the comment form of `article`.
    Compose {
        article: ArticleId,
        field: DraftField,
    },
}

impl Mode {
    pub fn context(self) -> Context {
        match self {
            Self::Browse => Context::Feed,
            Self::Search => Context::Search,
            Self::Compose { .. } => Context::Compose,
        }
    }
}

/// What a submit key press did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Cursor moved from the name field to the comment field.
    MovedToBody,
    Posted,
    /// Draft incomplete; nothing happened.
    Ignored,
}

// ============================================================================
// App
// ============================================================================

/// UI state wrapped around the portal.
///
/// Owns the [`PortalState`] plus everything that only matters to the
/// terminal: selection, mode, theme, status line and redraw flag.
pub struct App {
    pub portal: PortalState,
    pub mode: Mode,
    /// Index into the currently visible (filtered) articles.
    pub selected: usize,
    /// First visible line of the feed panel; maintained by the renderer.
    pub feed_scroll: usize,
    pub show_sidebar: bool,
    pub show_help: bool,
    pub help_scroll_offset: usize,
    pub keybindings: KeybindingRegistry,
    pub theme_variant: ThemeVariant,
    theme: StyleMap,
    pub status_message: Option<(Cow<'static, str>, Instant)>,
    pub needs_redraw: bool,
}

impl App {
    pub fn new(portal: PortalState) -> Self {
        let theme_variant = ThemeVariant::Dark;
        Self {
            portal,
            mode: Mode::Browse,
            selected: 0,
            feed_scroll: 0,
            show_sidebar: true,
            show_help: false,
            help_scroll_offset: 0,
            keybindings: KeybindingRegistry::new(),
            theme_variant,
            theme: StyleMap::from_palette(&theme_variant.palette()),
            status_message: None,
            needs_redraw: true,
        }
    }

    /// Build an app over `portal` configured by `config`.
    ///
    /// Bad theme names and keybinding overrides are reported in the status
    /// bar and otherwise ignored.
    pub fn with_config(portal: PortalState, config: &Config) -> Self {
        let mut app = Self::new(portal);
        app.show_sidebar = config.show_sidebar;

        match ThemeVariant::from_str_name(&config.theme) {
            Some(variant) => app.set_theme(variant),
            None => {
                tracing::warn!(theme = %config.theme, "Unknown theme, using dark");
                app.set_status(format!(
                    "Неизвестная тема '{}', используется тёмная",
                    config.theme
                ));
            }
        }

        let warnings = app.keybindings.apply_overrides(&config.keybindings);
        for warning in &warnings {
            tracing::warn!(warning = %warning, "Keybinding override rejected");
        }
        if let Some(first) = warnings.into_iter().next() {
            app.set_status(first);
        }

        app
    }

    // ========================================================================
    // Theme
    // ========================================================================

    pub fn style(&self, role: &str) -> Style {
        self.theme.resolve(role)
    }

    pub fn set_theme(&mut self, variant: ThemeVariant) {
        self.theme_variant = variant;
        self.theme = StyleMap::from_palette(&variant.palette());
        self.needs_redraw = true;
    }

    /// Switch to the next theme, returning its name.
    pub fn cycle_theme(&mut self) -> &'static str {
        self.set_theme(self.theme_variant.next());
        self.theme_variant.name()
    }

    // ========================================================================
    // Selection
    // ========================================================================

    pub fn visible_articles(&self) -> Vec<Arc<Article>> {
        self.portal.visible_articles()
    }

    pub fn selected_article(&self) -> Option<Arc<Article>> {
        self.visible_articles().get(self.selected).cloned()
    }

    pub fn nav_down(&mut self) {
        let len = self.visible_articles().len();
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn nav_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep the selection on `keep` if it is still visible, else on the first article.
    fn reselect(&mut self, keep: Option<ArticleId>) {
        let visible = self.visible_articles();
        self.selected = keep
            .and_then(|id| visible.iter().position(|a| a.id == id))
            .unwrap_or(0);
        self.feed_scroll = 0;
    }

    // ========================================================================
    // Search
    // ========================================================================

    pub fn enter_search(&mut self) {
        self.mode = Mode::Search;
    }

    pub fn exit_search(&mut self) {
        self.mode = Mode::Browse;
    }

    pub fn push_query_char(&mut self, c: char) {
        let mut query = self.portal.query().to_string();
        if push_input_char(&mut query, c, MAX_QUERY_LENGTH) {
            self.update_query(query);
        }
    }

    pub fn pop_query_char(&mut self) {
        let mut query = self.portal.query().to_string();
        if query.pop().is_some() {
            self.update_query(query);
        }
    }

    pub fn clear_query(&mut self) {
        if !self.portal.query().is_empty() {
            self.update_query(String::new());
        }
    }

    fn update_query(&mut self, query: String) {
        let keep = self.selected_article().map(|a| a.id);
        self.portal.set_query(query);
        self.reselect(keep);
    }

    // ========================================================================
    // Comments
    // ========================================================================

    /// Toggle the comment panel of the selected article.
    pub fn toggle_comments(&mut self) {
        if let Some(article) = self.selected_article() {
            let expanded = self.portal.toggle_expansion(article.id);
            tracing::debug!(article_id = %article.id, open = expanded.is_some(), "Toggled comments");
        }
    }

    /// Open the selected article's comment form for typing.
    ///
    /// The cursor starts in the name field unless a name was already typed.
    pub fn start_compose(&mut self) {
        let Some(article) = self.selected_article() else {
            return;
        };
        self.portal.expand(article.id);
        let field = match self.portal.draft(article.id) {
            Some(draft) if !draft.author.is_empty() => DraftField::Body,
            _ => DraftField::Author,
        };
        self.mode = Mode::Compose {
            article: article.id,
            field,
        };
    }

    pub fn exit_compose(&mut self) {
        self.mode = Mode::Browse;
    }

    pub fn next_field(&mut self) {
        if let Mode::Compose { article, field } = self.mode {
            self.mode = Mode::Compose {
                article,
                field: field.other(),
            };
        }
    }

    pub fn push_draft_char(&mut self, c: char) {
        if let Mode::Compose { article, field } = self.mode {
            let max = match field {
                DraftField::Author => MAX_AUTHOR_LENGTH,
                DraftField::Body => MAX_COMMENT_LENGTH,
            };
            push_input_char(self.portal.draft_mut(article).field_mut(field), c, max);
        }
    }

    pub fn pop_draft_char(&mut self) {
        if let Mode::Compose { article, field } = self.mode {
            self.portal.draft_mut(article).field_mut(field).pop();
        }
    }

    pub fn clear_draft_field(&mut self) {
        if let Mode::Compose { article, field } = self.mode {
            self.portal.draft_mut(article).field_mut(field).clear();
        }
    }

    /// Submit key in the comment form.
    ///
    /// From the name field this moves to the comment field. From the
    /// comment field it posts the draft; an incomplete draft is ignored.
    pub fn submit(&mut self) -> SubmitOutcome {
        let Mode::Compose { article, field } = self.mode else {
            return SubmitOutcome::Ignored;
        };

        if field == DraftField::Author {
            self.mode = Mode::Compose {
                article,
                field: DraftField::Body,
            };
            return SubmitOutcome::MovedToBody;
        }

        match self.portal.submit_comment(article) {
            Ok(_) => {
                self.mode = Mode::Browse;
                self.set_status("Комментарий опубликован");
                SubmitOutcome::Posted
            }
            Err(CommentRejected::IncompleteDraft) => SubmitOutcome::Ignored,
            Err(e @ CommentRejected::UnknownArticle(_)) => {
                tracing::warn!(error = %e, "Comment form open for a missing article");
                self.mode = Mode::Browse;
                self.set_status(format!("Ошибка: {}", e));
                SubmitOutcome::Ignored
            }
        }
    }

    // ========================================================================
    // Misc
    // ========================================================================

    /// Esc in the feed: close the open comment panel, else clear the query.
    pub fn back(&mut self) {
        if self.portal.expanded().is_some() {
            self.portal.collapse();
        } else {
            self.clear_query();
        }
    }

    pub fn toggle_sidebar(&mut self) {
        self.show_sidebar = !self.show_sidebar;
    }

    pub fn set_status(&mut self, msg: impl Into<Cow<'static, str>>) {
        self.status_message = Some((msg.into(), Instant::now()));
    }

    /// Clear the status message once it has been shown long enough.
    /// Returns true if a message was actually cleared.
    pub fn clear_expired_status(&mut self) -> bool {
        if let Some((_, time)) = &self.status_message {
            if time.elapsed().as_secs() >= STATUS_TTL_SECS {
                self.status_message = None;
                return true;
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tokio::time::{self, Duration};

    fn test_app() -> App {
        App::new(PortalState::seeded())
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            match app.mode {
                Mode::Search => app.push_query_char(c),
                Mode::Compose { .. } => app.push_draft_char(c),
                Mode::Browse => panic!("typing in browse mode"),
            }
        }
    }

    #[test]
    fn test_nav_stays_in_bounds() {
        let mut app = test_app();
        app.nav_up();
        assert_eq!(app.selected, 0);
        for _ in 0..10 {
            app.nav_down();
        }
        assert_eq!(app.selected, 2);
    }

    #[test]
    fn test_nav_on_empty_result() {
        let mut app = test_app();
        app.enter_search();
        type_str(&mut app, "футбол");
        app.nav_down();
        assert_eq!(app.selected, 0);
        assert!(app.selected_article().is_none());
    }

    #[test]
    fn test_search_filters_live() {
        let mut app = test_app();
        app.enter_search();
        type_str(&mut app, "квартал");
        assert_eq!(app.visible_articles().len(), 1);
        assert_eq!(app.selected_article().unwrap().id, ArticleId(3));

        app.pop_query_char();
        assert_eq!(app.portal.query(), "кварта");
        app.clear_query();
        assert_eq!(app.visible_articles().len(), 3);
    }

    #[test]
    fn test_selection_follows_article_through_filter() {
        let mut app = test_app();
        app.nav_down();
        app.nav_down();
        assert_eq!(app.selected_article().unwrap().id, ArticleId(3));

        app.enter_search();
        type_str(&mut app, "рынка");
        assert_eq!(app.selected, 0);
        app.clear_query();
        assert_eq!(app.selected_article().unwrap().id, ArticleId(3));
    }

    #[test]
    fn test_toggle_comments_on_selected() {
        let mut app = test_app();
        app.nav_down();
        app.toggle_comments();
        assert_eq!(app.portal.expanded(), Some(ArticleId(2)));
        app.toggle_comments();
        assert_eq!(app.portal.expanded(), None);
    }

    #[test]
    fn test_compose_and_post() {
        let mut app = test_app();
        app.start_compose();
        assert_eq!(
            app.mode,
            Mode::Compose {
                article: ArticleId(1),
                field: DraftField::Author
            }
        );
        type_str(&mut app, "Иван");
        assert_eq!(app.submit(), SubmitOutcome::MovedToBody);
        type_str(&mut app, "Согласен");
        assert_eq!(app.submit(), SubmitOutcome::Posted);

        assert_eq!(app.mode, Mode::Browse);
        let article = app.portal.article(ArticleId(1)).unwrap();
        assert_eq!(article.comments.len(), 2);
        assert_eq!(article.comments[1].author, "Иван");
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_submit_incomplete_is_ignored() {
        let mut app = test_app();
        app.start_compose();
        app.next_field();
        type_str(&mut app, "без имени");
        assert_eq!(app.submit(), SubmitOutcome::Ignored);
        assert!(matches!(app.mode, Mode::Compose { .. }));
        assert_eq!(app.portal.article(ArticleId(1)).unwrap().comments.len(), 1);
        assert_eq!(
            app.portal.draft(ArticleId(1)).unwrap().body,
            "без имени"
        );
    }

    #[test]
    fn test_drafts_do_not_leak_between_articles() {
        let mut app = test_app();
        app.start_compose();
        type_str(&mut app, "Иван");
        app.exit_compose();

        app.nav_down();
        app.start_compose();
        assert_eq!(
            app.mode,
            Mode::Compose {
                article: ArticleId(2),
                field: DraftField::Author
            }
        );
        assert!(app
            .portal
            .draft(ArticleId(2))
            .map_or(true, |d| d.author.is_empty()));
        assert_eq!(app.portal.expanded(), Some(ArticleId(2)));

        // going back resumes the earlier draft in the comment field
        app.exit_compose();
        app.nav_up();
        app.start_compose();
        assert_eq!(
            app.mode,
            Mode::Compose {
                article: ArticleId(1),
                field: DraftField::Body
            }
        );
    }

    #[test]
    fn test_draft_editing_keys() {
        let mut app = test_app();
        app.start_compose();
        type_str(&mut app, "Ивн");
        app.pop_draft_char();
        type_str(&mut app, "ан");
        assert_eq!(app.portal.draft(ArticleId(1)).unwrap().author, "Иван");
        app.clear_draft_field();
        assert_eq!(app.portal.draft(ArticleId(1)).unwrap().author, "");
    }

    #[test]
    fn test_author_length_capped() {
        let mut app = test_app();
        app.start_compose();
        type_str(&mut app, &"я".repeat(MAX_AUTHOR_LENGTH + 10));
        assert_eq!(
            app.portal.draft(ArticleId(1)).unwrap().author.chars().count(),
            MAX_AUTHOR_LENGTH
        );
    }

    #[test]
    fn test_back_collapses_then_clears_query() {
        let mut app = test_app();
        app.enter_search();
        type_str(&mut app, "интервью");
        app.exit_search();
        app.toggle_comments();

        app.back();
        assert_eq!(app.portal.expanded(), None);
        assert_eq!(app.portal.query(), "интервью");

        app.back();
        assert_eq!(app.portal.query(), "");
    }

    #[test]
    fn test_with_config_applies_theme_and_sidebar() {
        let config = Config {
            theme: "light".to_string(),
            show_sidebar: false,
            ..Config::default()
        };
        let app = App::with_config(PortalState::seeded(), &config);
        assert_eq!(app.theme_variant, ThemeVariant::Light);
        assert!(!app.show_sidebar);
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_with_config_reports_bad_theme() {
        let config = Config {
            theme: "neon".to_string(),
            ..Config::default()
        };
        let app = App::with_config(PortalState::seeded(), &config);
        assert_eq!(app.theme_variant, ThemeVariant::Dark);
        assert!(app.status_message.is_some());
    }

    #[test]
    fn test_cycle_theme() {
        let mut app = test_app();
        assert_eq!(app.cycle_theme(), "Светлая");
        assert_eq!(app.cycle_theme(), "Тёмная");
    }

    #[tokio::test]
    async fn test_status_expires_after_3_seconds() {
        time::pause();
        let mut app = test_app();
        app.set_status("Test message");

        time::advance(Duration::from_secs(2)).await;
        assert!(!app.clear_expired_status());
        assert!(app.status_message.is_some());

        time::advance(Duration::from_secs(2)).await;
        assert!(app.clear_expired_status());
        assert!(app.status_message.is_none());
    }
}

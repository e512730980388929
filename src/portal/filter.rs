//! Search filter over the article list.
//!
//! Plain case-insensitive substring match against title and summary. No
//! tokenization, ranking or fuzzy matching; the query is used as typed.

use super::types::Article;
use std::sync::Arc;

/// Returns true if `article`'s title or summary contains `query`, ignoring case.
///
/// An empty query matches every article.
pub fn matches_query(article: &Article, query: &str) -> bool {
    if query.is_empty() {
        return true;
    }
    let needle = query.to_lowercase();
    contains_lowered(article, &needle)
}

fn contains_lowered(article: &Article, needle: &str) -> bool {
    article.title.to_lowercase().contains(needle) || article.summary.to_lowercase().contains(needle)
}

/// Order-preserving subset of `articles` matching `query`.
///
/// Clones the `Arc`s, not the articles, so the result shares storage with
/// the input.
pub fn filter_articles(articles: &[Arc<Article>], query: &str) -> Vec<Arc<Article>> {
    if query.is_empty() {
        return articles.to_vec();
    }
    let needle = query.to_lowercase();
    articles
        .iter()
        .filter(|article| contains_lowered(article, &needle))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portal::seed::seed_articles;
    use pretty_assertions::assert_eq;

    fn seeded() -> Vec<Arc<Article>> {
        seed_articles().into_iter().map(Arc::new).collect()
    }

    fn titles(articles: &[Arc<Article>]) -> Vec<&str> {
        articles.iter().map(|a| a.title.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_everything_in_order() {
        let articles = seeded();
        let filtered = filter_articles(&articles, "");
        assert_eq!(titles(&filtered), titles(&articles));
        for (a, b) in articles.iter().zip(filtered.iter()) {
            assert!(Arc::ptr_eq(a, b));
        }
    }

    #[test]
    fn test_quarter_query_finds_market_analysis() {
        let filtered = filter_articles(&seeded(), "квартал");
        assert_eq!(
            titles(&filtered),
            vec!["Анализ телевизионного рынка за последний квартал"]
        );
    }

    #[test]
    fn test_case_insensitive_cyrillic() {
        let articles = seeded();
        let lower = filter_articles(&articles, "технологии");
        let upper = filter_articles(&articles, "ТЕХНОЛОГИИ");
        assert_eq!(titles(&lower), titles(&upper));
        assert_eq!(lower.len(), 1);
    }

    #[test]
    fn test_matches_summary_only() {
        // "рейтингов" appears only in the third article's summary
        let filtered = filter_articles(&seeded(), "Рейтингов");
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].id.0, 3);
    }

    #[test]
    fn test_content_is_not_searched() {
        // "облачные" appears only in the first article's body text
        assert!(filter_articles(&seeded(), "облачные").is_empty());
    }

    #[test]
    fn test_no_match_returns_empty() {
        assert!(filter_articles(&seeded(), "футбол").is_empty());
    }

    #[test]
    fn test_query_is_not_trimmed() {
        assert!(filter_articles(&seeded(), " квартал ").is_empty());
        assert_eq!(filter_articles(&seeded(), "за последний").len(), 1);
    }

    #[test]
    fn test_matches_query_predicate() {
        let articles = seeded();
        assert!(matches_query(&articles[1], "TeleВИД"));
        assert!(matches_query(&articles[1], "teleвид"));
        assert!(!matches_query(&articles[0], "продюсер"));
        assert!(matches_query(&articles[0], ""));
    }

    #[test]
    fn test_shared_word_matches_several() {
        // article 2 via "телевидения" in its summary, article 3 via its title;
        // article 1 only has "телевещании"
        let filtered = filter_articles(&seeded(), "телеви");
        assert_eq!(
            filtered.iter().map(|a| a.id.0).collect::<Vec<_>>(),
            vec![2, 3]
        );
    }
}

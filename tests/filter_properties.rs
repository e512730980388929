//! Property tests for the article filter.

use proptest::prelude::*;
use std::sync::Arc;
use televid::portal::{filter_articles, seed::seed_articles, Article};

fn seeded() -> Vec<Arc<Article>> {
    seed_articles().into_iter().map(Arc::new).collect()
}

fn ids(articles: &[Arc<Article>]) -> Vec<u64> {
    articles.iter().map(|a| a.id.0).collect()
}

/// Queries drawn from the seed vocabulary plus arbitrary text.
fn query() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("".to_string()),
        Just("теле".to_string()),
        Just("КВАРТАЛ".to_string()),
        Just("TeleВИД".to_string()),
        "[а-яА-Яa-zA-Z ]{0,8}",
    ]
}

#[test]
fn empty_query_returns_everything() {
    let articles = seeded();
    assert_eq!(ids(&filter_articles(&articles, "")), vec![1, 2, 3]);
}

proptest! {
    #[test]
    fn filtering_is_idempotent(q in query()) {
        let articles = seeded();
        let once = filter_articles(&articles, &q);
        let twice = filter_articles(&once, &q);
        prop_assert_eq!(ids(&once), ids(&twice));
    }

    #[test]
    fn case_of_query_does_not_matter(q in query()) {
        let articles = seeded();
        prop_assert_eq!(
            ids(&filter_articles(&articles, &q.to_uppercase())),
            ids(&filter_articles(&articles, &q.to_lowercase()))
        );
    }

    #[test]
    fn result_is_ordered_subsequence(q in query()) {
        let articles = seeded();
        let found = ids(&filter_articles(&articles, &q));
        let mut sorted = found.clone();
        sorted.sort_unstable();
        sorted.dedup();
        prop_assert_eq!(&found, &sorted);
        prop_assert!(found.iter().all(|id| (1..=3).contains(id)));
    }

    #[test]
    fn every_result_contains_query(q in query()) {
        let articles = seeded();
        let needle = q.to_lowercase();
        for article in filter_articles(&articles, &q) {
            let title = article.title.to_lowercase();
            let summary = article.summary.to_lowercase();
            prop_assert!(title.contains(&needle) || summary.contains(&needle));
        }
    }
}

//! Built-in dataset and static page copy.
//!
//! The portal has no data source: every run starts from this list and
//! forgets everything on exit.

use super::types::{Article, ArticleId, Comment, CommentId};

pub const BRAND: &str = "TeleВИД";

pub const NAV_LINKS: [&str; 3] = ["Новости", "О нас", "Контакты"];

pub const FEED_HEADING: &str = "Последние новости";

pub const SEARCH_PLACEHOLDER: &str = "Поиск новостей...";

/// Sidebar category list. Static, not derived from the articles.
pub const CATEGORIES: [&str; 5] = [
    "Технологии",
    "Интервью",
    "Аналитика",
    "Новости отрасли",
    "Обзоры",
];

pub const ABOUT_TITLE: &str = "О TeleВИД";

pub const ABOUT_TEXT: &str = "Ведущий новостной портал о телевизионной индустрии. \
Актуальные новости, аналитические материалы и эксклюзивные интервью.";

pub const COPYRIGHT: &str = "© 2024 TeleВИД. Все права защищены.";

pub const CONTACTS: [&str; 3] = ["✉ Почта", "☎ Телефон", "🌐 Сайт"];

fn comment(id: u64, author: &str, content: &str, timestamp: &str) -> Comment {
    Comment {
        id: CommentId(id),
        author: author.to_string(),
        content: content.to_string(),
        timestamp: timestamp.to_string(),
    }
}

/// The three launch articles, in display order.
pub fn seed_articles() -> Vec<Article> {
    vec![
        Article {
            id: ArticleId(1),
            title: "Новые технологии в телевещании изменят индустрию".to_string(),
            summary: "Революционные разработки в области цифрового вещания открывают новые \
                      возможности для создателей контента"
                .to_string(),
            content: "Индустрия телевещания переживает кардинальные изменения благодаря \
                      внедрению новых технологий. Искусственный интеллект, облачные сервисы \
                      и улучшенные алгоритмы сжатия видео позволяют создавать контент \
                      высочайшего качества."
                .to_string(),
            timestamp: "2 часа назад".to_string(),
            category: "Технологии".to_string(),
            comments: vec![comment(
                1,
                "Александр М.",
                "Очень интересная статья! Действительно, технологии развиваются стремительно.",
                "1 час назад",
            )],
        },
        Article {
            id: ArticleId(2),
            title: "Интервью с ведущими продюсерами TeleВИД".to_string(),
            summary: "Эксклюзивный разговор о будущем российского телевидения и новых \
                      форматах передач"
                .to_string(),
            content: "В эксклюзивном интервью ведущие продюсеры TeleВИД поделились своим \
                      видением развития отечественного телевидения. Обсуждались новые \
                      форматы, интерактивные технологии и планы на ближайшие годы."
                .to_string(),
            timestamp: "5 часов назад".to_string(),
            category: "Интервью".to_string(),
            comments: Vec::new(),
        },
        Article {
            id: ArticleId(3),
            title: "Анализ телевизионного рынка за последний квартал".to_string(),
            summary: "Подробный обзор тенденций, рейтингов и перспектив развития \
                      телевизионной индустрии"
                .to_string(),
            content: "Последний квартал показал значительные изменения в предпочтениях \
                      зрителей. Стриминговые платформы продолжают набирать популярность, \
                      однако традиционное телевидение адаптируется к новым реалиям."
                .to_string(),
            timestamp: "1 день назад".to_string(),
            category: "Аналитика".to_string(),
            comments: vec![
                comment(
                    2,
                    "Мария К.",
                    "Полезная аналитика, спасибо за детальный разбор!",
                    "12 часов назад",
                ),
                comment(
                    3,
                    "Дмитрий П.",
                    "Интересно было бы увидеть сравнение с европейскими показателями.",
                    "8 часов назад",
                ),
            ],
        },
    ]
}

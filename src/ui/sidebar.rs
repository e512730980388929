use crate::app::App;
use crate::portal::seed;
use crate::util::{display_width, wrap_text};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame,
};

const TITLE_LINES: usize = 2;

/// Render the sidebar widgets: categories, popular articles and the about box.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 10 || area.height < 3 {
        return;
    }

    let inner_width = area.width.saturating_sub(4) as usize;
    let popular = popular_lines(app, inner_width);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(seed::CATEGORIES.len() as u16 + 2),
            Constraint::Length(popular.len().min(u16::MAX as usize - 2) as u16 + 2),
            Constraint::Min(0),
        ])
        .split(area);

    let categories: Vec<Line> = seed::CATEGORIES
        .iter()
        .map(|c| Line::from(Span::styled(format!("› {}", c), app.style("sidebar_item"))))
        .collect();
    f.render_widget(
        Paragraph::new(categories).block(widget_block(app, "Категории")),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(popular).block(widget_block(app, "Популярное")),
        chunks[1],
    );

    let about = Paragraph::new(Span::styled(seed::ABOUT_TEXT, app.style("sidebar_item")))
        .wrap(Wrap { trim: true })
        .block(widget_block(app, seed::ABOUT_TITLE));
    f.render_widget(about, chunks[2]);
}

fn widget_block<'a>(app: &App, title: &'a str) -> Block<'a> {
    Block::default()
        .borders(Borders::ALL)
        .border_style(app.style("card_border"))
        .padding(Padding::horizontal(1))
        .title(Span::styled(
            format!(" {} ", title),
            app.style("sidebar_title").add_modifier(Modifier::BOLD),
        ))
}

/// Popular entries: title clamped to two lines, then its display time.
///
/// Built from the full article list, so the search query never hides them.
fn popular_lines(app: &App, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for (i, article) in app.portal.popular().iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        for title in clamp_lines(&article.title, width, TITLE_LINES) {
            lines.push(Line::from(Span::styled(title, app.style("card_title"))));
        }
        lines.push(Line::from(Span::styled(
            article.timestamp.clone(),
            app.style("comment_meta"),
        )));
    }
    lines
}

/// Wrap `text` to `width` and keep at most `max` lines, marking a cut with `…`.
fn clamp_lines(text: &str, width: usize, max: usize) -> Vec<String> {
    let mut lines = wrap_text(text, width);
    if lines.len() <= max || max == 0 {
        return lines;
    }
    lines.truncate(max);
    if let Some(last) = lines.last_mut() {
        while !last.is_empty() && display_width(last) + 1 > width {
            last.pop();
        }
        last.push('…');
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portal::PortalState;

    #[test]
    fn test_clamp_keeps_short_titles() {
        assert_eq!(
            clamp_lines("Короткий заголовок", 40, 2),
            vec!["Короткий заголовок"]
        );
    }

    #[test]
    fn test_clamp_cuts_to_two_lines() {
        let lines = clamp_lines("один два три четыре пять шесть семь", 10, 2);
        assert_eq!(lines.len(), 2);
        assert!(lines[1].ends_with('…'));
        assert!(display_width(&lines[1]) <= 10);
    }

    #[test]
    fn test_popular_ignores_query() {
        let mut app = App::new(PortalState::seeded());
        app.portal.set_query("несуществующий запрос");
        let text: Vec<String> = popular_lines(&app, 80)
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect();

        assert!(text.iter().any(|l| l == "5 часов назад"));
        assert!(text.iter().any(|l| l == "Анализ телевизионного рынка за последний квартал"));
    }
}

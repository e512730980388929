use crate::app::App;
use crate::portal::{seed, Article};
use crate::util::{display_width, wrap_text};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Padding, Paragraph},
    Frame,
};

use super::comments;

const SELECTED_MARKER: &str = "▌ ";
const MARKER_WIDTH: usize = 2;

/// Render the article feed: heading plus one card per visible article.
///
/// Updates `app.feed_scroll` so the selected card stays on screen.
pub fn render(f: &mut Frame, app: &mut App, area: Rect) {
    if area.width < 8 || area.height < 3 {
        return;
    }

    let block = Block::default()
        .title(Span::styled(seed::FEED_HEADING, app.style("feed_heading")))
        .padding(Padding::new(1, 1, 1, 0));
    let inner = block.inner(area);
    let width = inner.width as usize;
    let height = inner.height as usize;

    let visible = app.visible_articles();
    if visible.is_empty() {
        let msg = format!("Ничего не найдено по запросу «{}»", app.portal.query());
        let paragraph = Paragraph::new(Line::from(Span::styled(msg, app.style("article_body"))))
            .block(block);
        f.render_widget(paragraph, area);
        return;
    }

    let mut lines: Vec<Line<'static>> = Vec::new();
    let mut selected_span = (0, 0);
    for (i, article) in visible.iter().enumerate() {
        let is_selected = i == app.selected;
        let start = lines.len();
        lines.extend(card_lines(app, article, width, is_selected));
        if is_selected {
            selected_span = (start, lines.len());
        }
    }

    app.feed_scroll = scroll_to_show(app.feed_scroll, selected_span, height);

    let paragraph = Paragraph::new(lines)
        .block(block)
        .scroll((app.feed_scroll.min(u16::MAX as usize) as u16, 0));
    f.render_widget(paragraph, area);
}

/// Adjust `scroll` so lines `start..end` are visible in a `height`-line window.
///
/// When the card is taller than the window its top is shown.
fn scroll_to_show(scroll: usize, (start, end): (usize, usize), height: usize) -> usize {
    if height == 0 || start < scroll {
        return start;
    }
    if end > scroll + height {
        return start.min(end - height);
    }
    scroll
}

fn prefixed(prefix: &Span<'static>, line: Line<'static>) -> Line<'static> {
    let mut spans = Vec::with_capacity(line.spans.len() + 1);
    spans.push(prefix.clone());
    spans.extend(line.spans);
    Line::from(spans)
}

fn wrapped(text: &str, width: usize, style: Style) -> impl Iterator<Item = Line<'static>> {
    wrap_text(text, width)
        .into_iter()
        .map(move |l| Line::from(Span::styled(l, style)))
}

/// Lines making up one article card, including its comment panel when open.
fn card_lines(app: &App, article: &Article, width: usize, selected: bool) -> Vec<Line<'static>> {
    let inner = width.saturating_sub(MARKER_WIDTH);
    let mut body: Vec<Line<'static>> = Vec::new();

    // Category badge left, display time right
    let badge = format!(" {} ", article.category);
    let gap = inner
        .saturating_sub(display_width(&badge) + display_width(&article.timestamp))
        .max(1);
    body.push(Line::from(vec![
        Span::styled(badge, app.style("badge")),
        Span::raw(" ".repeat(gap)),
        Span::styled(article.timestamp.clone(), app.style("comment_meta")),
    ]));

    body.extend(wrapped(&article.title, inner, app.style("card_title")));
    body.push(Line::from(""));
    body.extend(wrapped(&article.summary, inner, app.style("article_summary")));
    body.push(Line::from(""));
    body.extend(wrapped(&article.content, inner, app.style("article_body")));
    body.push(Line::from(""));

    let open = app.portal.is_expanded(article.id);
    let toggle = format!(
        "{} Комментарии ({})",
        if open { "▾" } else { "▸" },
        article.comment_count()
    );
    body.push(Line::from(vec![
        Span::styled(toggle, app.style("comment_toggle")),
        Span::styled("    ♡ Нравится    ↗ Поделиться", app.style("comment_meta")),
    ]));

    if open {
        body.push(Line::from(""));
        body.extend(comments::panel_lines(app, article, inner));
    }

    let marker = if selected {
        Span::styled(SELECTED_MARKER, app.style("card_border_selected"))
    } else {
        Span::raw(" ".repeat(MARKER_WIDTH))
    };

    let mut lines: Vec<Line<'static>> = body
        .into_iter()
        .map(|line| prefixed(&marker, line))
        .collect();
    lines.push(Line::from(Span::styled(
        "─".repeat(width),
        app.style("card_border"),
    )));
    lines.push(Line::from(""));
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_keeps_position_when_visible() {
        assert_eq!(scroll_to_show(5, (6, 10), 10), 5);
    }

    #[test]
    fn test_scroll_up_to_card_top() {
        assert_eq!(scroll_to_show(20, (4, 12), 10), 4);
    }

    #[test]
    fn test_scroll_down_to_card_bottom() {
        assert_eq!(scroll_to_show(0, (8, 15), 10), 5);
    }

    #[test]
    fn test_tall_card_shows_top() {
        assert_eq!(scroll_to_show(0, (10, 40), 10), 10);
    }
}

use crate::app::{App, Mode};
use crate::portal::seed;
use crate::util::{truncate_start_to_width, truncate_to_width};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

const SEARCH_WIDTH: u16 = 36;

/// Render the page header: brand, navigation labels and the search box.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(SEARCH_WIDTH)])
        .split(area);

    let mut spans = vec![Span::styled(
        seed::BRAND,
        app.style("brand").add_modifier(Modifier::BOLD),
    )];
    for link in seed::NAV_LINKS {
        spans.push(Span::raw("   "));
        spans.push(Span::styled(link, app.style("nav_link")));
    }
    // Vertically aligned with the text row of the bordered search box
    let brand =
        Paragraph::new(Line::from(spans)).block(Block::default().padding(Padding::top(1)));
    f.render_widget(brand, chunks[0]);

    render_search_box(f, app, chunks[1]);
}

fn render_search_box(f: &mut Frame, app: &App, area: Rect) {
    let active = app.mode == Mode::Search;
    let query = app.portal.query();
    let inner_width = area.width.saturating_sub(5) as usize;

    let text = if query.is_empty() && !active {
        Span::styled(seed::SEARCH_PLACEHOLDER, app.style("comment_meta"))
    } else {
        Span::raw(shown_query(query, active, inner_width))
    };

    let border = if active {
        app.style("search_box_active")
    } else {
        app.style("search_box")
    };
    let paragraph = Paragraph::new(Line::from(vec![Span::raw("🔍 "), text])).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border),
    );
    f.render_widget(paragraph, area);
}

/// Query text as shown in the search box.
///
/// While typing, the end of a long query and the cursor stay in view.
fn shown_query(query: &str, active: bool, width: usize) -> String {
    if active {
        let mut shown = truncate_start_to_width(query, width.saturating_sub(1)).into_owned();
        shown.push('_');
        shown
    } else {
        truncate_to_width(query, width).into_owned()
    }
}

use crate::app::App;
use crate::portal::seed;
use crate::util::display_width;
use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the page footer: brand and copyright left, contact labels right.
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(app.style("card_border"));
    let inner = block.inner(area);

    let left = format!("{}  {}", seed::BRAND, seed::COPYRIGHT);
    let right = seed::CONTACTS.join("   ");
    let gap = (inner.width as usize)
        .saturating_sub(display_width(&left) + display_width(&right))
        .max(2);

    let line = Line::from(vec![
        Span::styled(seed::BRAND, app.style("footer").add_modifier(Modifier::BOLD)),
        Span::styled(format!("  {}", seed::COPYRIGHT), app.style("footer")),
        Span::raw(" ".repeat(gap)),
        Span::styled(right, app.style("footer")),
    ]);
    f.render_widget(Paragraph::new(line).block(block), area);
}

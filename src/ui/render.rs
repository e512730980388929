//! Page layout.
//!
//! Header on top, then the article feed with the sidebar beside it, then
//! the footer and the status bar. The help overlay is drawn last.

use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
    Frame,
};

use super::{articles, footer, header, help, sidebar, status};

/// Minimum terminal dimensions required for normal operation.
pub(super) const MIN_WIDTH: u16 = 60;
pub(super) const MIN_HEIGHT: u16 = 16;

/// Below this width the sidebar is hidden even when enabled.
const SIDEBAR_MIN_WIDTH: u16 = 90;

/// Draw one frame of the portal.
pub fn render(f: &mut Frame, app: &mut App) {
    let area = f.area();
    if area.width < 1 || area.height < 1 {
        return;
    }

    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = if area.height < 3 || area.width < 20 {
            Paragraph::new("Мало места")
        } else {
            Paragraph::new(format!(
                "Окно терминала слишком мало\n\nМинимум: {}x{}\nСейчас: {}x{}",
                MIN_WIDTH, MIN_HEIGHT, area.width, area.height
            ))
            .alignment(Alignment::Center)
        };
        f.render_widget(msg, area);
        return;
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(2),
            Constraint::Length(1),
        ])
        .split(area);

    header::render(f, app, rows[0]);
    render_body(f, app, rows[1]);
    footer::render(f, app, rows[2]);
    status::render(f, app, rows[3]);

    if app.show_help {
        help::render(f, app);
    }
}

/// Feed two thirds, sidebar one third.
fn render_body(f: &mut Frame, app: &mut App, area: Rect) {
    if app.show_sidebar && area.width >= SIDEBAR_MIN_WIDTH {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(67), Constraint::Percentage(33)])
            .split(area);

        articles::render(f, app, columns[0]);
        sidebar::render(f, app, columns[1]);
    } else {
        articles::render(f, app, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::portal::{ArticleId, PortalState};
    use ratatui::{backend::TestBackend, Terminal};

    fn draw(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| render(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[test]
    fn test_page_shows_brand_feed_and_sidebar() {
        let mut app = App::new(PortalState::seeded());
        let screen = draw(&mut app, 120, 50);

        assert!(screen.contains("TeleВИД"));
        assert!(screen.contains("Последние новости"));
        assert!(screen.contains("Категории"));
        assert!(screen.contains("Популярное"));
        assert!(screen.contains("Все права защищены"));
    }

    #[test]
    fn test_sidebar_hidden_when_toggled_off() {
        let mut app = App::new(PortalState::seeded());
        app.toggle_sidebar();
        let screen = draw(&mut app, 120, 50);
        assert!(!screen.contains("Популярное"));
    }

    #[test]
    fn test_narrow_terminal_drops_sidebar() {
        let mut app = App::new(PortalState::seeded());
        let screen = draw(&mut app, 70, 40);
        assert!(screen.contains("Последние новости"));
        assert!(!screen.contains("Популярное"));
    }

    #[test]
    fn test_too_small_terminal_shows_message() {
        let mut app = App::new(PortalState::seeded());
        let screen = draw(&mut app, 40, 10);
        assert!(screen.contains("слишком мало"));
    }

    #[test]
    fn test_no_matches_message() {
        let mut app = App::new(PortalState::seeded());
        app.portal.set_query("zzz");
        let screen = draw(&mut app, 120, 50);
        assert!(screen.contains("Ничего не найдено"));
    }

    #[test]
    fn test_expanded_article_shows_comment_form() {
        let mut app = App::new(PortalState::seeded());
        app.portal.expand(ArticleId(1));
        let screen = draw(&mut app, 120, 60);
        assert!(screen.contains("Отправить комментарий"));
        assert!(screen.contains("Александр М."));
    }

    #[test]
    fn test_help_overlay_drawn() {
        let mut app = App::new(PortalState::seeded());
        app.show_help = true;
        let screen = draw(&mut app, 120, 50);
        assert!(screen.contains("Форма комментария"));
        assert!(screen.contains("Лента"));
    }
}

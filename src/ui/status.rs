use crate::app::{App, Mode};
use crate::keybindings::{Action, Context};
use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use std::borrow::Cow;

/// Hints shown in the article list, in display order.
const FEED_HINTS: [(Action, &str); 7] = [
    (Action::NavDown, "далее"),
    (Action::ToggleComments, "комментарии"),
    (Action::Compose, "написать"),
    (Action::EnterSearch, "поиск"),
    (Action::ToggleSidebar, "панель"),
    (Action::ShowHelp, "справка"),
    (Action::Quit, "выход"),
];

const SEARCH_HINTS: &str =
    "Вводите запрос | Backspace удалить | Ctrl+u очистить | Enter/Esc готово";
const COMPOSE_HINTS: &str =
    "Tab другое поле | Enter далее/отправить | Ctrl+u очистить | Esc выйти (черновик сохранится)";

/// Render the status bar
pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if area.width < 1 || area.height < 1 {
        return;
    }

    let text: Cow<'_, str> = if let Some((msg, _)) = &app.status_message {
        Cow::Borrowed(msg.as_ref())
    } else {
        match app.mode {
            Mode::Browse => Cow::Owned(feed_hints(app)),
            Mode::Search => Cow::Borrowed(SEARCH_HINTS),
            Mode::Compose { .. } => Cow::Borrowed(COMPOSE_HINTS),
        }
    };

    f.render_widget(Paragraph::new(text).style(app.style("status_bar")), area);
}

/// Keybinding hints for the article list, reflecting config overrides.
fn feed_hints(app: &App) -> String {
    FEED_HINTS
        .iter()
        .filter_map(|(action, label)| {
            app.keybindings
                .key_hint(Context::Feed, *action)
                .map(|key| format!("[{}]{}", key, label))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::portal::PortalState;

    #[test]
    fn test_feed_hints_use_default_keys() {
        let app = App::new(PortalState::seeded());
        let hints = feed_hints(&app);
        assert!(hints.starts_with("[j]далее [Enter]комментарии [w]написать [/]поиск"));
        assert!(hints.ends_with("[q]выход"));
    }

    #[test]
    fn test_feed_hints_follow_overrides() {
        let mut config = Config::default();
        config
            .keybindings
            .insert("compose".to_string(), "n".to_string());
        let app = App::with_config(PortalState::seeded(), &config);
        assert!(feed_hints(&app).contains("[n]написать"));
    }
}

//! Input handling for the TUI.
//!
//! Routes each key press by mode: help overlay first, then the search box,
//! the comment form, or the article list.

use crate::app::{App, Mode, SubmitOutcome};
use crate::keybindings::{Action as KbAction, Context as KbContext};
use crossterm::event::{KeyCode, KeyModifiers};

use super::Action;

/// Main input dispatch function.
pub fn handle_input(app: &mut App, code: KeyCode, modifiers: KeyModifiers) -> Action {
    let context = app.mode.context();
    let action = app.keybindings.action_for_key(code, modifiers, context);

    if app.show_help {
        // Ctrl-chords bound to Quit still work over the overlay
        if action == Some(KbAction::Quit) && modifiers.contains(KeyModifiers::CONTROL) {
            return Action::Quit;
        }
        handle_help_input(app, code);
        return Action::Continue;
    }

    match context {
        KbContext::Feed => handle_feed_input(app, action),
        KbContext::Search => handle_search_input(app, action, code, modifiers),
        KbContext::Compose => handle_compose_input(app, action, code, modifiers),
    }
}

/// Handle input while the help overlay is visible.
///
/// Captures all keys: j/k/Up/Down scroll, Esc/q/? dismiss.
fn handle_help_input(app: &mut App, code: KeyCode) {
    match code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') => {
            app.show_help = false;
            app.help_scroll_offset = 0;
        }
        KeyCode::Char('j') | KeyCode::Down => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_add(1);
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.help_scroll_offset = app.help_scroll_offset.saturating_sub(1);
        }
        _ => {}
    }
}

fn handle_feed_input(app: &mut App, action: Option<KbAction>) -> Action {
    match action {
        Some(KbAction::Quit) => return Action::Quit,
        Some(KbAction::NavDown) => app.nav_down(),
        Some(KbAction::NavUp) => app.nav_up(),
        Some(KbAction::ToggleComments) => app.toggle_comments(),
        Some(KbAction::EnterSearch) => app.enter_search(),
        Some(KbAction::Compose) => app.start_compose(),
        Some(KbAction::Back) => app.back(),
        Some(KbAction::ToggleSidebar) => app.toggle_sidebar(),
        Some(KbAction::CycleTheme) => {
            let name = app.cycle_theme();
            app.set_status(format!("Тема: {}", name));
        }
        Some(KbAction::ShowHelp) => {
            app.show_help = true;
            app.help_scroll_offset = 0;
        }
        _ => {}
    }
    Action::Continue
}

/// Printable character carried by a key press, if it should be typed.
fn typed_char(code: KeyCode, modifiers: KeyModifiers) -> Option<char> {
    match code {
        KeyCode::Char(c)
            if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}

fn handle_search_input(
    app: &mut App,
    action: Option<KbAction>,
    code: KeyCode,
    modifiers: KeyModifiers,
) -> Action {
    match action {
        Some(KbAction::Quit) => return Action::Quit,
        Some(KbAction::ExitSearch) => app.exit_search(),
        Some(KbAction::DeleteChar) => app.pop_query_char(),
        Some(KbAction::ClearField) => app.clear_query(),
        Some(_) => {}
        None => {
            if let Some(c) = typed_char(code, modifiers) {
                app.push_query_char(c);
            }
        }
    }
    Action::Continue
}

fn handle_compose_input(
    app: &mut App,
    action: Option<KbAction>,
    code: KeyCode,
    modifiers: KeyModifiers,
) -> Action {
    debug_assert!(matches!(app.mode, Mode::Compose { .. }));
    match action {
        Some(KbAction::Quit) => return Action::Quit,
        Some(KbAction::ExitCompose) => app.exit_compose(),
        Some(KbAction::NextField) => app.next_field(),
        Some(KbAction::Submit) => {
            if app.submit() == SubmitOutcome::Ignored {
                tracing::debug!("Submit ignored: comment draft incomplete");
            }
        }
        Some(KbAction::DeleteChar) => app.pop_draft_char(),
        Some(KbAction::ClearField) => app.clear_draft_field(),
        Some(_) => {}
        None => {
            if let Some(c) = typed_char(code, modifiers) {
                app.push_draft_char(c);
            }
        }
    }
    Action::Continue
}

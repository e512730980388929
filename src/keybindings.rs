//! Keybinding registry: maps key events to actions, with config overrides.
//!
//! Bindings are grouped by [`Context`]. The text-entry contexts (search box
//! and comment form) only bind non-printing keys, so every printable
//! character there is treated as typed text.
use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

// ============================================================================
// Action Enum
// ============================================================================

/// All user-facing actions that can be triggered by keybindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Quit,
    NavDown,
    NavUp,
    ToggleComments,
    EnterSearch,
    ExitSearch,
    Compose,
    ExitCompose,
    NextField,
    Submit,
    DeleteChar,
    ClearField,
    Back,
    ToggleSidebar,
    CycleTheme,
    ShowHelp,
}

impl Action {
    /// Human-readable description for the help screen.
    pub fn describe(self) -> &'static str {
        match self {
            Self::Quit => "Выйти",
            Self::NavDown => "Следующая статья",
            Self::NavUp => "Предыдущая статья",
            Self::ToggleComments => "Показать / скрыть комментарии",
            Self::EnterSearch => "Поиск новостей",
            Self::ExitSearch => "Выйти из поиска (запрос сохранится)",
            Self::Compose => "Написать комментарий",
            Self::ExitCompose => "Закрыть форму (черновик сохранится)",
            Self::NextField => "Переключить поле: имя / комментарий",
            Self::Submit => "Следующее поле / отправить",
            Self::DeleteChar => "Удалить последний символ",
            Self::ClearField => "Очистить поле",
            Self::Back => "Закрыть комментарии / сбросить поиск",
            Self::ToggleSidebar => "Показать / скрыть боковую панель",
            Self::CycleTheme => "Сменить тему",
            Self::ShowHelp => "Справка",
        }
    }
}

// ============================================================================
// Context Enum
// ============================================================================

/// Dispatch context: determines which bindings are active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Context {
    /// Browsing the article list.
    Feed,
    /// Typing in the search box.
    Search,
    /// Typing in a comment form.
    Compose,
}

impl Context {
    /// Contexts where printable keys are typed text.
    pub fn is_text_entry(self) -> bool {
        matches!(self, Self::Search | Self::Compose)
    }
}

// ============================================================================
// Key Specification
// ============================================================================

/// A key event: code + modifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeySpec {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeySpec {
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    pub const fn ch(c: char) -> Self {
        Self::plain(KeyCode::Char(c))
    }

    pub const fn ctrl(c: char) -> Self {
        Self::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    /// A character without Ctrl or Alt, i.e. something that types text.
    pub fn is_printable(&self) -> bool {
        matches!(self.code, KeyCode::Char(_))
            && !self
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    }
}

/// Parse a key string from config into a KeySpec.
///
/// Supported formats:
/// - Single char: "q", "j", "/"
/// - Named keys: "Enter", "Esc", "Tab", "Up", "Down", "Backspace", "Space"
/// - Ctrl combos: "Ctrl+q"
/// - Function keys: "F1" through "F12"
fn parse_key_string(s: &str) -> Option<KeySpec> {
    let s = s.trim();

    if let Some(rest) = s.strip_prefix("Ctrl+") {
        let mut chars = rest.trim().chars();
        return match (chars.next(), chars.next()) {
            (Some(c), None) => Some(KeySpec::ctrl(c)),
            _ => None,
        };
    }

    let named = match s.to_lowercase().as_str() {
        "enter" | "return" => Some(KeyCode::Enter),
        "esc" | "escape" => Some(KeyCode::Esc),
        "tab" => Some(KeyCode::Tab),
        "up" => Some(KeyCode::Up),
        "down" => Some(KeyCode::Down),
        "left" => Some(KeyCode::Left),
        "right" => Some(KeyCode::Right),
        "backspace" => Some(KeyCode::Backspace),
        "space" => Some(KeyCode::Char(' ')),
        _ => None,
    };
    if let Some(code) = named {
        return Some(KeySpec::plain(code));
    }

    if let Some(n) = s
        .strip_prefix(['F', 'f'])
        .and_then(|n| n.parse::<u8>().ok())
    {
        return (1..=12)
            .contains(&n)
            .then(|| KeySpec::plain(KeyCode::F(n)));
    }

    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(KeySpec::ch(c)),
        _ => None,
    }
}

/// Format a KeySpec as a human-readable string for the help screen.
fn format_key(key: &KeySpec) -> String {
    let modifier = if key.modifiers.contains(KeyModifiers::CONTROL) {
        "Ctrl+"
    } else {
        ""
    };

    let key_name = match key.code {
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::F(n) => format!("F{}", n),
        _ => "?".to_string(),
    };

    format!("{}{}", modifier, key_name)
}

/// Default bindings, in help-screen order.
const DEFAULT_BINDINGS: &[(Context, KeySpec, Action)] = &[
    // Feed
    (Context::Feed, KeySpec::ch('q'), Action::Quit),
    (Context::Feed, KeySpec::ch('j'), Action::NavDown),
    (Context::Feed, KeySpec::plain(KeyCode::Down), Action::NavDown),
    (Context::Feed, KeySpec::ch('k'), Action::NavUp),
    (Context::Feed, KeySpec::plain(KeyCode::Up), Action::NavUp),
    (Context::Feed, KeySpec::plain(KeyCode::Enter), Action::ToggleComments),
    (Context::Feed, KeySpec::ch('c'), Action::ToggleComments),
    (Context::Feed, KeySpec::ch('/'), Action::EnterSearch),
    (Context::Feed, KeySpec::ch('w'), Action::Compose),
    (Context::Feed, KeySpec::plain(KeyCode::Esc), Action::Back),
    (Context::Feed, KeySpec::ch('s'), Action::ToggleSidebar),
    (Context::Feed, KeySpec::ch('T'), Action::CycleTheme),
    (Context::Feed, KeySpec::ch('?'), Action::ShowHelp),
    (Context::Feed, KeySpec::ctrl('c'), Action::Quit),
    // Search box
    (Context::Search, KeySpec::plain(KeyCode::Esc), Action::ExitSearch),
    (Context::Search, KeySpec::plain(KeyCode::Enter), Action::ExitSearch),
    (Context::Search, KeySpec::plain(KeyCode::Backspace), Action::DeleteChar),
    (Context::Search, KeySpec::ctrl('u'), Action::ClearField),
    (Context::Search, KeySpec::ctrl('c'), Action::Quit),
    // Comment form
    (Context::Compose, KeySpec::plain(KeyCode::Esc), Action::ExitCompose),
    (Context::Compose, KeySpec::plain(KeyCode::Tab), Action::NextField),
    (Context::Compose, KeySpec::plain(KeyCode::Enter), Action::Submit),
    (Context::Compose, KeySpec::plain(KeyCode::Backspace), Action::DeleteChar),
    (Context::Compose, KeySpec::ctrl('u'), Action::ClearField),
    (Context::Compose, KeySpec::ctrl('c'), Action::Quit),
];

// ============================================================================
// Keybinding Registry
// ============================================================================

/// Registry of keybindings, supporting default bindings and config overrides.
///
/// The same key can map to different actions in different contexts.
pub struct KeybindingRegistry {
    lookup: HashMap<(Context, KeySpec), Action>,
    bindings: Vec<(Context, KeySpec, Action)>,
}

impl KeybindingRegistry {
    /// Create a registry with the default bindings.
    pub fn new() -> Self {
        let mut registry = Self {
            lookup: HashMap::new(),
            bindings: Vec::with_capacity(DEFAULT_BINDINGS.len()),
        };
        for &(context, key, action) in DEFAULT_BINDINGS {
            registry.bind(context, key, action);
        }
        registry
    }

    fn bind(&mut self, context: Context, key: KeySpec, action: Action) {
        self.lookup.insert((context, key), action);
        self.bindings.push((context, key, action));
    }

    /// Apply user overrides from config keybindings map.
    ///
    /// Keys in the map are action names (e.g., "quit", "toggle_comments").
    /// Values are key strings (e.g., "q", "Ctrl+q", "F5"). The new key
    /// replaces every default key of that action, in every context it was
    /// bound in.
    ///
    /// A printable key is never bound in the search box or the comment form,
    /// where it has to stay typable: such an override only applies to the
    /// other contexts of the action, and is rejected if there are none. An
    /// override whose key already belongs to another action is rejected.
    ///
    /// Returns a list of warnings for every override that was not applied.
    pub fn apply_overrides(&mut self, overrides: &HashMap<String, String>) -> Vec<String> {
        let mut warnings = Vec::new();

        for (action_name, key_str) in overrides {
            let Some(action) = parse_action_name(action_name) else {
                warnings.push(format!(
                    "Неизвестное действие '{}' в настройках клавиш, пропущено",
                    action_name
                ));
                continue;
            };

            let Some(key) = parse_key_string(key_str) else {
                warnings.push(format!(
                    "Не удалось разобрать клавишу '{}' для '{}', пропущено",
                    key_str, action_name
                ));
                continue;
            };

            let mut contexts: Vec<Context> = self
                .bindings
                .iter()
                .filter(|(_, _, a)| *a == action)
                .map(|(c, _, _)| *c)
                .collect();
            contexts.dedup();
            if key.is_printable() {
                contexts.retain(|c| !c.is_text_entry());
            }

            if contexts.is_empty() {
                warnings.push(format!(
                    "Клавиша '{}' нужна для ввода текста и не может означать '{}', пропущено",
                    key_str, action_name
                ));
                continue;
            }

            let taken = contexts.iter().find_map(|ctx| {
                self.lookup
                    .get(&(*ctx, key))
                    .filter(|bound| **bound != action)
                    .copied()
            });
            if let Some(other) = taken {
                warnings.push(format!(
                    "Клавиша '{}' уже занята действием «{}», '{}' пропущено",
                    key_str,
                    other.describe(),
                    action_name
                ));
                continue;
            }

            self.lookup
                .retain(|(c, _), a| !(*a == action && contexts.contains(c)));
            self.bindings
                .retain(|(c, _, a)| !(*a == action && contexts.contains(c)));

            for ctx in contexts {
                self.bind(ctx, key, action);
            }

            tracing::info!(action = %action_name, key = %key_str, "Applied keybinding override");
        }

        warnings
    }

    /// Look up the action for a given key in a given context.
    ///
    /// Shift is ignored for character keys: the character already carries
    /// the case, and terminals disagree on whether to report the modifier.
    pub fn action_for_key(
        &self,
        code: KeyCode,
        modifiers: KeyModifiers,
        context: Context,
    ) -> Option<Action> {
        let modifiers = match code {
            KeyCode::Char(_) => modifiers - KeyModifiers::SHIFT,
            _ => modifiers,
        };
        self.lookup
            .get(&(context, KeySpec::new(code, modifiers)))
            .copied()
    }

    /// First key bound to `action` in `context`, formatted for display.
    pub fn key_hint(&self, context: Context, action: Action) -> Option<String> {
        self.bindings
            .iter()
            .find(|(c, _, a)| *c == context && *a == action)
            .map(|(_, key, _)| format_key(key))
    }

    /// Get all bindings for the help screen.
    ///
    /// Returns (context, key_display_string, action, description) tuples.
    pub fn all_bindings(&self) -> Vec<(Context, String, Action, &'static str)> {
        self.bindings
            .iter()
            .map(|(ctx, key, action)| (*ctx, format_key(key), *action, action.describe()))
            .collect()
    }
}

impl Default for KeybindingRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse an action name string (from config) into an Action enum.
fn parse_action_name(name: &str) -> Option<Action> {
    match name.to_lowercase().as_str() {
        "quit" => Some(Action::Quit),
        "nav_down" | "down" => Some(Action::NavDown),
        "nav_up" | "up" => Some(Action::NavUp),
        "toggle_comments" | "comments" => Some(Action::ToggleComments),
        "enter_search" | "search" => Some(Action::EnterSearch),
        "exit_search" => Some(Action::ExitSearch),
        "compose" | "write" => Some(Action::Compose),
        "exit_compose" => Some(Action::ExitCompose),
        "next_field" => Some(Action::NextField),
        "submit" | "send" => Some(Action::Submit),
        "delete_char" => Some(Action::DeleteChar),
        "clear_field" | "clear" => Some(Action::ClearField),
        "back" => Some(Action::Back),
        "toggle_sidebar" | "sidebar" => Some(Action::ToggleSidebar),
        "cycle_theme" | "theme" => Some(Action::CycleTheme),
        "show_help" | "help" => Some(Action::ShowHelp),
        _ => None,
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Theme system for the TUI.
//!
//! Provides semantic color roles that map to ratatui `Style` values.
//! The `ThemeVariant` enum selects between Dark and Light palettes,
//! and `StyleMap` resolves role names to concrete styles.

use ratatui::style::{Color, Modifier, Style};
use std::collections::HashMap;

// ============================================================================
// Theme Variant
// ============================================================================

/// Available theme variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeVariant {
    Dark,
    Light,
}

impl ThemeVariant {
    /// Parse a variant name from a string (case-insensitive).
    pub fn from_str_name(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn palette(self) -> ColorPalette {
        match self {
            Self::Dark => ColorPalette::dark(),
            Self::Light => ColorPalette::light(),
        }
    }

    /// Cycle to the next variant: Dark → Light → Dark.
    pub fn next(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    /// Display name for the status bar.
    pub fn name(self) -> &'static str {
        match self {
            Self::Dark => "Тёмная",
            Self::Light => "Светлая",
        }
    }
}

// ============================================================================
// Color Palette
// ============================================================================

/// A complete color palette mapping every semantic UI role to a `Style`.
#[derive(Debug, Clone)]
pub struct ColorPalette {
    // -- Header / footer --
    pub brand: Style,
    pub nav_link: Style,
    pub search_box: Style,
    pub search_box_active: Style,
    pub footer: Style,

    // -- Article cards --
    pub feed_heading: Style,
    pub card_border: Style,
    pub card_border_selected: Style,
    pub card_title: Style,
    pub badge: Style,
    pub article_summary: Style,
    pub article_body: Style,
    pub comment_toggle: Style,

    // -- Comments --
    pub avatar: Style,
    pub comment_author: Style,
    pub comment_meta: Style,
    pub comment_body: Style,
    pub input: Style,
    pub input_focused: Style,
    pub button_enabled: Style,
    pub button_disabled: Style,

    // -- Sidebar --
    pub sidebar_title: Style,
    pub sidebar_item: Style,

    // -- Chrome --
    pub status_bar: Style,
    pub help_heading: Style,
}

impl ColorPalette {
    fn dark() -> Self {
        let muted = Style::default().fg(Color::DarkGray);
        Self {
            brand: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            nav_link: Style::default().fg(Color::Gray),
            search_box: muted,
            search_box_active: Style::default().fg(Color::Cyan),
            footer: Style::default().fg(Color::Gray),

            feed_heading: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            card_border: muted,
            card_border_selected: Style::default().fg(Color::Cyan),
            card_title: Style::default().add_modifier(Modifier::BOLD),
            badge: Style::default().bg(Color::DarkGray).fg(Color::White),
            article_summary: Style::default().fg(Color::Gray),
            article_body: muted,
            comment_toggle: Style::default().fg(Color::Cyan),

            avatar: Style::default().bg(Color::Gray).fg(Color::Black),
            comment_author: Style::default().add_modifier(Modifier::BOLD),
            comment_meta: muted,
            comment_body: Style::default().fg(Color::Gray),
            input: muted,
            input_focused: Style::default().fg(Color::Yellow),
            button_enabled: Style::default()
                .bg(Color::White)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            button_disabled: muted.add_modifier(Modifier::DIM),

            sidebar_title: Style::default().add_modifier(Modifier::BOLD),
            sidebar_item: Style::default().fg(Color::Gray),

            status_bar: Style::default().bg(Color::DarkGray).fg(Color::White),
            help_heading: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        }
    }

    fn light() -> Self {
        let ink = Style::default().fg(Color::Black);
        let muted = Style::default().fg(Color::DarkGray);
        Self {
            brand: ink.add_modifier(Modifier::BOLD),
            nav_link: muted,
            search_box: muted,
            search_box_active: Style::default().fg(Color::Blue),
            footer: muted,

            feed_heading: ink.add_modifier(Modifier::BOLD),
            card_border: Style::default().fg(Color::Gray),
            card_border_selected: Style::default().fg(Color::Blue),
            card_title: ink.add_modifier(Modifier::BOLD),
            badge: Style::default().bg(Color::Gray).fg(Color::Black),
            article_summary: ink,
            article_body: muted,
            comment_toggle: Style::default().fg(Color::Blue),

            avatar: Style::default().bg(Color::Gray).fg(Color::Black),
            comment_author: ink.add_modifier(Modifier::BOLD),
            comment_meta: muted,
            comment_body: ink,
            input: muted,
            input_focused: Style::default().fg(Color::Magenta),
            button_enabled: Style::default()
                .bg(Color::Black)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            button_disabled: Style::default().fg(Color::Gray),

            sidebar_title: ink.add_modifier(Modifier::BOLD),
            sidebar_item: muted,

            status_bar: Style::default().bg(Color::White).fg(Color::Black),
            help_heading: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
        }
    }
}

// ============================================================================
// Style Map
// ============================================================================

/// String-keyed style lookup, built from a `ColorPalette`.
#[derive(Debug, Clone)]
pub struct StyleMap {
    map: HashMap<&'static str, Style>,
}

impl StyleMap {
    pub fn from_palette(p: &ColorPalette) -> Self {
        let entries: [(&'static str, Style); 25] = [
            ("brand", p.brand),
            ("nav_link", p.nav_link),
            ("search_box", p.search_box),
            ("search_box_active", p.search_box_active),
            ("footer", p.footer),
            ("feed_heading", p.feed_heading),
            ("card_border", p.card_border),
            ("card_border_selected", p.card_border_selected),
            ("card_title", p.card_title),
            ("badge", p.badge),
            ("article_summary", p.article_summary),
            ("article_body", p.article_body),
            ("comment_toggle", p.comment_toggle),
            ("avatar", p.avatar),
            ("comment_author", p.comment_author),
            ("comment_meta", p.comment_meta),
            ("comment_body", p.comment_body),
            ("input", p.input),
            ("input_focused", p.input_focused),
            ("button_enabled", p.button_enabled),
            ("button_disabled", p.button_disabled),
            ("sidebar_title", p.sidebar_title),
            ("sidebar_item", p.sidebar_item),
            ("status_bar", p.status_bar),
            ("help_heading", p.help_heading),
        ];

        Self {
            map: entries.into_iter().collect(),
        }
    }

    /// Resolve a role name to its `Style`. Returns `Style::default()` for unknown roles.
    pub fn resolve(&self, role: &str) -> Style {
        self.map.get(role).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}

// ============================================================================
// Tests
// ============================================================================

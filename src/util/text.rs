use std::borrow::Cow;

use textwrap::{Options, WrapAlgorithm};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const ELLIPSIS: char = '…';

/// Terminal column width of `s`.
///
/// ```
/// use televid::util::display_width;
///
/// assert_eq!(display_width("TeleВИД"), 7);
/// assert_eq!(display_width("你好"), 4);
/// ```
pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Cut `s` to at most `max_width` columns, ending in "…" when shortened.
///
/// Returns `Cow::Borrowed` when `s` already fits.
///
/// ```
/// use televid::util::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Новости", 10), "Новости");
/// assert_eq!(truncate_to_width("Аналитика", 5), "Анал…");
/// ```
pub fn truncate_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if display_width(s) <= max_width {
        return Cow::Borrowed(s);
    }
    if max_width == 0 {
        return Cow::Borrowed("");
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut end = 0;
    for (idx, c) in s.char_indices() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        end = idx + c.len_utf8();
    }

    let mut out = String::with_capacity(end + ELLIPSIS.len_utf8());
    out.push_str(&s[..end]);
    out.push(ELLIPSIS);
    Cow::Owned(out)
}

/// Keep the end of `s` within `max_width` columns, starting with "…" when
/// shortened. Used where the most recently typed text must stay visible.
///
/// ```
/// use televid::util::truncate_start_to_width;
///
/// assert_eq!(truncate_start_to_width("Новости", 10), "Новости");
/// assert_eq!(truncate_start_to_width("Аналитика", 5), "…тика");
/// ```
pub fn truncate_start_to_width(s: &str, max_width: usize) -> Cow<'_, str> {
    if display_width(s) <= max_width {
        return Cow::Borrowed(s);
    }
    if max_width == 0 {
        return Cow::Borrowed("");
    }

    let budget = max_width - 1;
    let mut used = 0;
    let mut start = s.len();
    for (idx, c) in s.char_indices().rev() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        start = idx;
    }

    let mut out = String::with_capacity(s.len() - start + ELLIPSIS.len_utf8());
    out.push(ELLIPSIS);
    out.push_str(&s[start..]);
    Cow::Owned(out)
}

/// Greedy word wrap of `text` into lines of at most `width` columns.
///
/// Words wider than `width` are split between characters. Returns no lines
/// for blank text or zero width.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    if width == 0 || text.trim().is_empty() {
        return Vec::new();
    }
    let options = Options::new(width)
        .wrap_algorithm(WrapAlgorithm::FirstFit)
        .break_words(true);
    textwrap::wrap(text.trim(), options)
        .into_iter()
        .map(Cow::into_owned)
        .collect()
}

/// Append a typed character to an input field.
///
/// Control characters are dropped and the field never grows past
/// `max_chars` characters. Returns whether the field changed.
pub fn push_input_char(field: &mut String, c: char, max_chars: usize) -> bool {
    if c.is_control() || field.chars().count() >= max_chars {
        return false;
    }
    field.push(c);
    true
}

/// Avatar letter for a comment author: the first non-space character, upper-cased.
pub fn initial(author: &str) -> String {
    author
        .trim_start()
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_else(|| "?".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fits_is_borrowed() {
        let result = truncate_to_width("Обзоры", 6);
        assert!(matches!(result, Cow::Borrowed(_)));
        assert_eq!(result, "Обзоры");
    }

    #[test]
    fn test_truncates_cyrillic_on_char_boundary() {
        assert_eq!(truncate_to_width("Интервью", 4), "Инт…");
    }

    #[test]
    fn test_wide_chars_never_overflow() {
        // each CJK char is 2 columns; 5 columns leaves room for two plus "…"
        let out = truncate_to_width("日本語テスト", 5);
        assert_eq!(out, "日本…");
        assert!(display_width(&out) <= 5);
    }

    #[test]
    fn test_zero_and_one_column() {
        assert_eq!(truncate_to_width("abc", 0), "");
        assert_eq!(truncate_to_width("abc", 1), "…");
        assert_eq!(truncate_to_width("", 0), "");
    }

    #[test]
    fn test_truncate_start_keeps_tail() {
        assert_eq!(truncate_start_to_width("телевидение", 6), "…дение");
        assert_eq!(truncate_start_to_width("日本語テスト", 5), "…スト");
        assert_eq!(truncate_start_to_width("abc", 1), "…");
        assert!(matches!(
            truncate_start_to_width("abc", 3),
            Cow::Borrowed("abc")
        ));
    }

    #[test]
    fn test_wrap_text_breaks_on_words() {
        let lines = wrap_text("Последний квартал показал значительные изменения", 20);
        assert_eq!(
            lines,
            vec!["Последний квартал", "показал значительные", "изменения"]
        );
        for line in &lines {
            assert!(display_width(line) <= 20);
        }
    }

    #[test]
    fn test_wrap_text_splits_long_words() {
        assert_eq!(wrap_text("abcdefgh ij", 3), vec!["abc", "def", "gh", "ij"]);
    }

    #[test]
    fn test_wrap_text_blank_and_zero_width() {
        assert!(wrap_text("   ", 10).is_empty());
        assert!(wrap_text("text", 0).is_empty());
    }

    #[test]
    fn test_push_input_char_limits() {
        let mut field = String::new();
        assert!(push_input_char(&mut field, 'И', 2));
        assert!(push_input_char(&mut field, 'в', 2));
        assert!(!push_input_char(&mut field, 'а', 2));
        assert_eq!(field, "Ив");
    }

    #[test]
    fn test_push_input_char_drops_controls() {
        let mut field = String::new();
        assert!(!push_input_char(&mut field, '\x1b', 10));
        assert!(!push_input_char(&mut field, '\n', 10));
        assert!(field.is_empty());
    }

    #[test]
    fn test_initial() {
        assert_eq!(initial("мария К."), "М");
        assert_eq!(initial("  Дмитрий"), "Д");
        assert_eq!(initial(""), "?");
    }
}

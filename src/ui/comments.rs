use crate::app::{App, Mode};
use crate::keybindings::{Action, Context};
use crate::portal::{Article, CommentDraft, DraftField};
use crate::util::{initial, wrap_text};
use ratatui::{
    style::Modifier,
    text::{Line, Span},
};

const INDENT: &str = "    ";
const AUTHOR_LABEL: &str = "Ваше имя:    ";
const BODY_LABEL: &str = "Комментарий: ";
const LABEL_WIDTH: usize = 13;
const SUBMIT_BUTTON: &str = "[ Отправить комментарий ]";

/// Lines for the expanded comment panel of `article`: thread then form.
pub(super) fn panel_lines(app: &App, article: &Article, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        format!("── Комментарии ({}) ──", article.comment_count()),
        app.style("comment_toggle").add_modifier(Modifier::BOLD),
    )));

    if article.comments.is_empty() {
        lines.push(Line::from(Span::styled(
            "Пока нет комментариев. Будьте первым!",
            app.style("comment_meta"),
        )));
    }

    for comment in &article.comments {
        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", initial(&comment.author)), app.style("avatar")),
            Span::raw(" "),
            Span::styled(comment.author.clone(), app.style("comment_author")),
            Span::styled(format!(" · {}", comment.timestamp), app.style("comment_meta")),
        ]));
        for line in wrap_text(&comment.content, width.saturating_sub(INDENT.len())) {
            lines.push(Line::from(vec![
                Span::raw(INDENT),
                Span::styled(line, app.style("comment_body")),
            ]));
        }
    }

    lines.push(Line::from(""));
    lines.extend(form_lines(app, article, width));
    lines
}

fn form_lines(app: &App, article: &Article, width: usize) -> Vec<Line<'static>> {
    let empty = CommentDraft::default();
    let draft = app.portal.draft(article.id).unwrap_or(&empty);
    let focus = match app.mode {
        Mode::Compose { article: id, field } if id == article.id => Some(field),
        _ => None,
    };

    let mut lines = field_lines(
        app,
        AUTHOR_LABEL,
        &draft.author,
        "Ваше имя",
        focus == Some(DraftField::Author),
        width,
    );
    lines.extend(field_lines(
        app,
        BODY_LABEL,
        &draft.body,
        "Написать комментарий...",
        focus == Some(DraftField::Body),
        width,
    ));

    let button_style = if app.portal.can_submit(article.id) {
        app.style("button_enabled")
    } else {
        app.style("button_disabled")
    };
    let mut button = vec![Span::styled(SUBMIT_BUTTON, button_style)];
    if focus.is_none() {
        let hint = app
            .keybindings
            .key_hint(Context::Feed, Action::Compose)
            .unwrap_or_else(|| "w".to_string());
        button.push(Span::styled(
            format!("  [{}] написать", hint),
            app.style("comment_meta"),
        ));
    }
    lines.push(Line::from(button));
    lines
}

/// One labelled input; long values wrap under the value column.
fn field_lines(
    app: &App,
    label: &'static str,
    value: &str,
    placeholder: &'static str,
    focused: bool,
    width: usize,
) -> Vec<Line<'static>> {
    let style = if focused {
        app.style("input_focused")
    } else {
        app.style("input")
    };
    let label_span = Span::styled(label, app.style("comment_meta"));

    if value.is_empty() {
        let mut spans = vec![label_span];
        if focused {
            spans.push(Span::styled("_", style));
        }
        spans.push(Span::styled(
            placeholder,
            app.style("comment_meta").add_modifier(Modifier::DIM),
        ));
        return vec![Line::from(spans)];
    }

    let mut text = value.to_string();
    if focused {
        text.push('_');
    }
    let mut chunks = wrap_text(&text, width.saturating_sub(LABEL_WIDTH)).into_iter();
    let first = chunks.next().unwrap_or_default();

    let mut lines = vec![Line::from(vec![label_span, Span::styled(first, style)])];
    for chunk in chunks {
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(LABEL_WIDTH)),
            Span::styled(chunk, style),
        ]));
    }
    lines
}

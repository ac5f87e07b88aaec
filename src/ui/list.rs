//! News list screen.

use chrono::Utc;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthChar;

use crate::app::App;
use crate::locale::{
    category_style, format_with_count, format_with_error, localized_content, localized_title,
    messages, plain_text_preview, relative_time,
};

use super::theme;

pub fn draw(frame: &mut Frame, app: &App) {
    let msgs = messages(app.locale);
    let [header_area, body_area, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(1),
        Constraint::Length(2),
    ])
    .areas(frame.area());

    draw_header(frame, app, header_area);

    if let Some(error) = app.list.error() {
        let text = vec![
            Line::from(Span::styled(
                format_with_error(msgs.home.load_failed, error),
                theme::ERROR,
            )),
            Line::from(Span::styled(
                format!("r: {}", msgs.home.reload),
                theme::HINT,
            )),
        ];
        frame.render_widget(
            Paragraph::new(text).block(Block::new().padding(Padding::uniform(1))),
            body_area,
        );
    } else if app.visible_items().is_empty() {
        let text = if app.list.is_loading() {
            msgs.home.loading
        } else {
            msgs.home.no_data
        };
        frame.render_widget(
            Paragraph::new(Span::styled(text, theme::DIM))
                .block(Block::new().padding(Padding::uniform(1))),
            body_area,
        );
    } else {
        draw_items(frame, app, body_area);
    }

    draw_footer(frame, app, footer_area);
}

fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let msgs = messages(app.locale);
    let mut spans = vec![Span::styled(msgs.home.heading, theme::HEADING)];
    if let Some(pagination) = app.list.pagination() {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format_with_count(msgs.home.total_count, pagination.total_count as i64),
            theme::DIM,
        ));
    }
    let locale_line = Line::from(Span::styled(
        format!("{}: {}", msgs.language, app.locale.label()),
        theme::DIM,
    ));
    frame.render_widget(
        Paragraph::new(vec![Line::from(spans), locale_line]),
        area,
    );
}

fn draw_items(frame: &mut Frame, app: &App, area: Rect) {
    let msgs = messages(app.locale);
    let now = Utc::now();
    let preview_budget = area.width.saturating_sub(6) as usize;

    let items: Vec<ListItem> = app
        .visible_items()
        .iter()
        .map(|record| {
            let style = category_style(record.category.as_deref());
            let category = record
                .category
                .as_deref()
                .unwrap_or(msgs.home.category_unknown);
            let preview = localized_content(record, app.locale)
                .map(plain_text_preview)
                .unwrap_or_default();

            let title_line = Line::from(Span::styled(
                localized_title(record, app.locale).to_string(),
                theme::TITLE,
            ));
            let meta_line = Line::from(vec![
                Span::styled(format!("[{}]", category), theme::badge(style)),
                Span::raw(" "),
                Span::styled(
                    relative_time(&record.iso_date, now, msgs),
                    theme::DIM,
                ),
                Span::raw("  "),
                Span::styled(truncate_to_width(&preview, preview_budget), theme::DIM),
            ]);
            ListItem::new(vec![title_line, meta_line, Line::from("")])
        })
        .collect();

    let list = List::new(items)
        .block(Block::new().borders(Borders::TOP))
        .highlight_style(theme::SELECTED)
        .highlight_symbol("› ");

    let mut state = ListState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let msgs = messages(app.locale);
    let status = if app.list.is_loading() {
        Span::styled(msgs.home.load_more_loading, theme::DIM)
    } else if app.list.pagination().is_some_and(|p| p.has_next) {
        Span::styled(format!("m: {}", msgs.home.load_more), theme::DIM)
    } else if app.list.pagination().is_some() {
        Span::styled(msgs.home.no_more, theme::DIM)
    } else {
        Span::raw("")
    };
    let hints = Line::from(Span::styled(
        format!("j/k  Enter  r: {}  l: {}  q", msgs.home.reload, msgs.language),
        theme::HINT,
    ));
    frame.render_widget(
        Paragraph::new(vec![Line::from(status), hints]),
        area,
    );
}

/// Truncate to a display-cell budget, CJK-aware.
fn truncate_to_width(text: &str, max_width: usize) -> String {
    let mut width = 0;
    let mut out = String::new();
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if width + w > max_width.saturating_sub(1) {
            out.push('…');
            break;
        }
        width += w;
        out.push(ch);
    }
    out
}

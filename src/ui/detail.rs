//! Article detail screen.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::App;
use crate::locale::{
    absolute_time, category_style, format_with_error, localized_content, localized_title,
    messages, Locale,
};
use crate::markdown::render_markdown;
use crate::models::NewsRecord;

use super::theme;

pub fn draw(frame: &mut Frame, app: &App) {
    let Some(detail) = &app.detail else {
        return;
    };
    let msgs = messages(app.locale);
    let [body_area, footer_area] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).areas(frame.area());

    if detail.loading {
        centered_message(frame, body_area, msgs.detail.loading, theme::DIM);
    } else if detail.not_found {
        centered_message(frame, body_area, msgs.detail.not_found, theme::DIM);
    } else if let Some(error) = &detail.error {
        centered_message(
            frame,
            body_area,
            &format_with_error(msgs.home.load_failed, error),
            theme::ERROR,
        );
    } else if let Some(record) = &detail.record {
        draw_article(frame, body_area, record, app.locale, app.scroll);
    }

    let hints = Line::from(Span::styled(
        format!("Esc: {}  j/k  r  l: {}  q", msgs.detail.back, msgs.language),
        theme::HINT,
    ));
    frame.render_widget(Paragraph::new(hints), footer_area);
}

fn draw_article(frame: &mut Frame, area: Rect, record: &NewsRecord, locale: Locale, scroll: u16) {
    let msgs = messages(locale);
    let style = category_style(record.category.as_deref());
    let category = record
        .category
        .as_deref()
        .unwrap_or(msgs.detail.category_unknown);

    let [header_area, content_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).areas(area);

    let header = vec![
        Line::from(Span::styled(
            localized_title(record, locale).to_string(),
            theme::TITLE,
        )),
        Line::from(vec![
            Span::styled(format!("[{}]", category), theme::badge(style)),
            Span::raw("  "),
            Span::styled(absolute_time(&record.iso_date, locale), theme::DIM),
        ]),
    ];
    frame.render_widget(Paragraph::new(header), header_area);

    let lines = match localized_content(record, locale) {
        Some(content) => render_markdown(content),
        None => vec![Line::from(Span::styled(
            msgs.detail.no_content,
            theme::DIM,
        ))],
    };
    let body = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0))
        .block(
            Block::new()
                .borders(Borders::TOP)
                .padding(Padding::horizontal(1)),
        );
    frame.render_widget(body, content_area);
}

fn centered_message(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    style: ratatui::style::Style,
) {
    let [_, middle, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(1),
        Constraint::Fill(1),
    ])
    .areas(area);
    frame.render_widget(
        Paragraph::new(Span::styled(message.to_string(), style)).centered(),
        middle,
    );
}

//! Markdown rendering for article bodies.
//!
//! Converts a Markdown/HTML body to styled ratatui Lines for the detail
//! view. Handles headings, bold/italic, inline and fenced code, lists,
//! blockquotes, links, and simple tables. Raw HTML chunks are reduced to
//! their text content so mixed Markdown/HTML articles stay readable, and
//! malformed markup renders as plain text instead of failing.

use once_cell::sync::Lazy;
use pulldown_cmark::{Event, Options, Parser, Tag, TagEnd};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use regex::Regex;

const STYLE_HEADING: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);
const STYLE_INLINE_CODE: Style = Style::new().fg(Color::Cyan);
const STYLE_CODE_BLOCK: Style = Style::new().fg(Color::DarkGray);
const STYLE_QUOTE: Style = Style::new().fg(Color::Gray).add_modifier(Modifier::ITALIC);

static HTML_TAG_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^>]*>").expect("invalid tag-strip pattern"));

/// Renderer state for one article body.
struct Renderer {
    lines: Vec<Line<'static>>,
    current_spans: Vec<Span<'static>>,
    style_stack: Vec<Style>,
    in_code_block: bool,
    quote_depth: usize,
    /// Ordered-list counters; `None` entries are bullet lists.
    list_stack: Vec<Option<u64>>,
    in_table: bool,
    table_row: Vec<String>,
    table_cell: String,
}

impl Renderer {
    fn new() -> Self {
        Self {
            lines: Vec::new(),
            current_spans: Vec::new(),
            style_stack: Vec::new(),
            in_code_block: false,
            quote_depth: 0,
            list_stack: Vec::new(),
            in_table: false,
            table_row: Vec::new(),
            table_cell: String::new(),
        }
    }

    fn current_style(&self) -> Style {
        *self.style_stack.last().unwrap_or(&Style::new())
    }

    /// Flush buffered spans to a finished line, applying the blockquote
    /// prefix.
    fn flush(&mut self) {
        if self.current_spans.is_empty() {
            return;
        }
        let mut spans = Vec::with_capacity(self.current_spans.len() + 1);
        if self.quote_depth > 0 {
            spans.push(Span::styled("│ ".repeat(self.quote_depth), STYLE_QUOTE));
        }
        spans.append(&mut self.current_spans);
        self.lines.push(Line::from(spans));
    }

    /// Blank separator line, collapsed so two block boundaries never stack.
    fn blank(&mut self) {
        let last_nonempty = self
            .lines
            .last()
            .is_some_and(|line| !line.spans.is_empty());
        if last_nonempty {
            self.lines.push(Line::from(""));
        }
    }

    fn push_text(&mut self, text: &str) {
        let style = self.current_style();
        if self.in_table {
            self.table_cell.push_str(text);
            return;
        }
        // Every newline becomes its own line; inside a code block this
        // preserves the block's line structure.
        for (i, part) in text.split('\n').enumerate() {
            if i > 0 {
                self.flush();
            }
            if !part.is_empty() {
                self.current_spans
                    .push(Span::styled(part.to_string(), style));
            }
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Heading { .. } => {
                self.flush();
                self.blank();
                self.style_stack.push(STYLE_HEADING);
            }
            Tag::Paragraph => {
                self.flush();
                if self.list_stack.is_empty() {
                    self.blank();
                }
            }
            Tag::CodeBlock(_) => {
                self.flush();
                self.blank();
                self.in_code_block = true;
                self.style_stack.push(STYLE_CODE_BLOCK);
            }
            Tag::Strong => {
                let style = self.current_style().add_modifier(Modifier::BOLD);
                self.style_stack.push(style);
            }
            Tag::Emphasis => {
                let style = self.current_style().add_modifier(Modifier::ITALIC);
                self.style_stack.push(style);
            }
            Tag::Link { .. } => {
                let style = self
                    .current_style()
                    .fg(Color::Blue)
                    .add_modifier(Modifier::UNDERLINED);
                self.style_stack.push(style);
            }
            Tag::BlockQuote(_) => {
                self.flush();
                self.blank();
                self.quote_depth += 1;
            }
            Tag::List(start) => {
                self.flush();
                if self.list_stack.is_empty() {
                    self.blank();
                }
                self.list_stack.push(start);
            }
            Tag::Item => {
                self.flush();
                let indent = "  ".repeat(self.list_stack.len().saturating_sub(1));
                let marker = match self.list_stack.last_mut() {
                    Some(Some(number)) => {
                        let marker = format!("{}{}. ", indent, number);
                        *number += 1;
                        marker
                    }
                    _ => format!("{}• ", indent),
                };
                self.current_spans.push(Span::raw(marker));
            }
            Tag::Table(_) => {
                self.flush();
                self.blank();
                self.in_table = true;
            }
            Tag::TableHead | Tag::TableRow => self.table_row.clear(),
            Tag::TableCell => self.table_cell.clear(),
            _ => {}
        }
    }

    fn end(&mut self, tag_end: TagEnd) {
        match tag_end {
            TagEnd::Heading(_) | TagEnd::CodeBlock => {
                self.flush();
                self.style_stack.pop();
                if matches!(tag_end, TagEnd::CodeBlock) {
                    self.in_code_block = false;
                }
                self.blank();
            }
            TagEnd::Paragraph => {
                self.flush();
                if self.list_stack.is_empty() {
                    self.blank();
                }
            }
            TagEnd::Strong | TagEnd::Emphasis | TagEnd::Link => {
                self.style_stack.pop();
            }
            TagEnd::BlockQuote(_) => {
                self.flush();
                self.quote_depth = self.quote_depth.saturating_sub(1);
                self.blank();
            }
            TagEnd::List(_) => {
                self.flush();
                self.list_stack.pop();
                if self.list_stack.is_empty() {
                    self.blank();
                }
            }
            TagEnd::Item => self.flush(),
            TagEnd::TableCell => {
                self.table_row.push(std::mem::take(&mut self.table_cell));
            }
            TagEnd::TableHead | TagEnd::TableRow => {
                if !self.table_row.is_empty() {
                    let row = self.table_row.join(" | ");
                    self.lines.push(Line::from(row));
                    self.table_row.clear();
                }
            }
            TagEnd::Table => {
                self.in_table = false;
                self.blank();
            }
            _ => {}
        }
    }

    fn finish(mut self) -> Vec<Line<'static>> {
        self.flush();
        while self
            .lines
            .last()
            .is_some_and(|line| line.spans.is_empty())
        {
            self.lines.pop();
        }
        if self.lines.is_empty() {
            self.lines.push(Line::from(""));
        }
        self.lines
    }
}

/// Render an article body to styled lines for the detail view.
pub fn render_markdown(text: &str) -> Vec<Line<'static>> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(text, options);

    let mut renderer = Renderer::new();
    for event in parser {
        match event {
            Event::Start(tag) => renderer.start(tag),
            Event::End(tag_end) => renderer.end(tag_end),
            Event::Text(text) => renderer.push_text(&text),
            Event::Code(code) => {
                if renderer.in_table {
                    renderer.table_cell.push_str(&code);
                } else {
                    renderer
                        .current_spans
                        .push(Span::styled(code.to_string(), STYLE_INLINE_CODE));
                }
            }
            Event::Html(html) | Event::InlineHtml(html) => {
                let stripped = HTML_TAG_RE.replace_all(&html, "");
                let stripped = stripped.trim();
                if !stripped.is_empty() {
                    renderer.push_text(stripped);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if renderer.in_table {
                    renderer.table_cell.push(' ');
                } else {
                    renderer.flush();
                }
            }
            Event::Rule => {
                renderer.flush();
                renderer.blank();
                renderer
                    .lines
                    .push(Line::from(Span::styled("────────", STYLE_QUOTE)));
                renderer.blank();
            }
            _ => {}
        }
    }
    renderer.finish()
}

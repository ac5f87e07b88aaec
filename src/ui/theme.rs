//! Shared colors and styles.

use ratatui::style::{Color, Modifier, Style};

use crate::locale::CategoryStyle;

pub const TITLE: Style = Style::new().fg(Color::White).add_modifier(Modifier::BOLD);
pub const DIM: Style = Style::new().fg(Color::DarkGray);
pub const SELECTED: Style = Style::new()
    .bg(Color::Rgb(40, 44, 52))
    .add_modifier(Modifier::BOLD);
pub const ERROR: Style = Style::new().fg(Color::Red);
pub const HINT: Style = Style::new().fg(Color::DarkGray);
pub const HEADING: Style = Style::new().fg(Color::Cyan).add_modifier(Modifier::BOLD);

/// Badge color per category style bucket.
pub fn category_color(style: CategoryStyle) -> Color {
    match style {
        CategoryStyle::Finance => Color::Yellow,
        CategoryStyle::Technology => Color::Blue,
        CategoryStyle::World => Color::Green,
        CategoryStyle::Sports => Color::Magenta,
        CategoryStyle::Uncategorized => Color::DarkGray,
    }
}

pub fn badge(style: CategoryStyle) -> Style {
    Style::new().fg(category_color(style))
}

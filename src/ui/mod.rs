//! Terminal rendering, one module per screen.

mod detail;
mod list;
pub mod theme;

use ratatui::Frame;

use crate::app::{App, Screen};

/// Draw the active screen.
pub fn draw(frame: &mut Frame, app: &App) {
    match app.screen {
        Screen::List => list::draw(frame, app),
        Screen::Detail => detail::draw(frame, app),
    }
}

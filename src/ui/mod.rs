pub mod chat_panel;
pub mod command_bar;
pub mod event_list;
pub mod footer;
pub mod header;
pub mod theme;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Block,
    Frame,
};

use crate::app::{App, InputMode};
use self::theme::Theme;

pub fn render(f: &mut Frame, app: &App) {
    let size = f.area();
    let theme = Theme::for_mode(app.theme);

    // Paint the themed backdrop before any panel lands on top of it.
    f.render_widget(
        Block::default().style(Style::default().bg(theme.background).fg(theme.text)),
        size,
    );

    // Bottom bar: input box (3) while typing, hint line (1) otherwise
    let bottom_height = if app.input_mode == InputMode::Normal { 1 } else { 3 };
    let chat_height = if app.chat_minimized { 3 } else { 12 };

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // header
            Constraint::Min(6),                // event cards
            Constraint::Length(chat_height),   // chat panel
            Constraint::Length(bottom_height), // footer or input box
        ])
        .split(size);

    header::render(f, vertical[0], app, &theme);
    event_list::render(f, vertical[1], app, &theme);
    chat_panel::render(f, vertical[2], app, &theme);

    if app.input_mode == InputMode::Normal {
        footer::render(f, vertical[3], app, &theme);
    } else {
        command_bar::render(f, vertical[3], app, &theme);
    }
}

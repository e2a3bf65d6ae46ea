use ratatui::{
    layout::Rect,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::{App, InputMode};
use crate::ui::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let title = match app.input_mode {
        InputMode::Chat => " Message — Enter to send, Esc to cancel ",
        InputMode::Search => " Search events — Enter to apply, Esc to cancel ",
        InputMode::Normal => return,
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.input_border))
        .title(title);

    let paragraph = Paragraph::new(Line::raw(app.input_buffer.clone())).block(block);
    f.render_widget(paragraph, area);

    // Position cursor inside the input box
    let x = area.x + 1 + app.input_cursor as u16;
    let y = area.y + 1;
    f.set_cursor_position((x.min(area.x + area.width.saturating_sub(2)), y));
}

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;
use crate::ui::theme::Theme;

pub fn render(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let mut spans = vec![
        hint("↑↓", "navigate", theme),
        hint("tab", "sport", theme),
        hint("/", "search", theme),
        hint(":", "chat", theme),
        hint("1-3", "quick ask", theme),
        hint("r", "refresh", theme),
        hint("t", "theme", theme),
        hint("m", "chat panel", theme),
        hint("q", "quit", theme),
    ];

    // Theme indicator
    spans.push(Span::raw("  "));
    spans.push(Span::styled(
        format!(" {} ", app.theme.as_str().to_uppercase()),
        Style::default().fg(theme.badge_fg).bg(theme.badge_bg),
    ));

    // Flash message
    if let Some((msg, _)) = &app.flash_message {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            msg.clone(),
            Style::default().fg(ratatui::style::Color::Yellow),
        ));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn hint(key: &str, desc: &str, theme: &Theme) -> Span<'static> {
    Span::styled(format!(" {key}:{desc} "), Style::default().fg(theme.dim))
}

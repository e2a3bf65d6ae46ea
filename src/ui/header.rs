use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::app::{App, SPORT_FILTERS};
use crate::ui::theme::{sport_color, Theme};

pub fn render(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let mut spans = vec![Span::styled(
        " Matchday ",
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD),
    )];

    // Filter tabs, active one highlighted
    for (i, filter) in SPORT_FILTERS.iter().enumerate() {
        let style = if i == app.filter_index {
            Style::default()
                .fg(theme.badge_fg)
                .bg(sport_color(filter))
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.dim)
        };
        spans.push(Span::styled(format!(" {filter} "), style));
        spans.push(Span::raw(" "));
    }

    spans.push(Span::styled(
        format!("  {}", chrono::Local::now().format("%A, %B %-d, %Y")),
        Style::default().fg(theme.dim),
    ));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

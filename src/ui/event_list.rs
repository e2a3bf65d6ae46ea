use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::app::{empty_events_message, App, EventsView, EVENTS_ERROR};
use crate::model::sport_event::SportEvent;
use crate::ui::theme::{sport_color, status_color, Theme};

pub fn render(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.accent))
        .title(title(app));

    match app.events_view {
        EventsView::Loading => {
            let paragraph = Paragraph::new(Line::from(Span::styled(
                "Loading events...",
                Style::default().fg(theme.dim),
            )))
            .block(block);
            f.render_widget(paragraph, area);
        }
        EventsView::Failed => {
            let paragraph = Paragraph::new(Line::from(Span::styled(
                EVENTS_ERROR,
                Style::default().fg(ratatui::style::Color::Red),
            )))
            .block(block);
            f.render_widget(paragraph, area);
        }
        EventsView::Ready => {
            if app.events.is_empty() {
                let paragraph = Paragraph::new(Line::from(Span::styled(
                    empty_events_message(app.filter()),
                    Style::default().fg(theme.dim),
                )))
                .block(block);
                f.render_widget(paragraph, area);
                return;
            }

            let items: Vec<ListItem> = app
                .visible_events()
                .into_iter()
                .enumerate()
                .map(|(i, event)| card(event, i == app.selected_event, theme))
                .collect();

            f.render_widget(List::new(items).block(block), area);
        }
    }
}

fn title(app: &App) -> String {
    let shown = app.visible_events().len();
    if app.search_query.is_empty() {
        format!(" Events — {} ({shown}) ", app.filter())
    } else {
        format!(
            " Events — {} · \"{}\" ({shown}/{}) ",
            app.filter(),
            app.search_query,
            app.events.len()
        )
    }
}

fn card<'a>(event: &SportEvent, selected: bool, theme: &Theme) -> ListItem<'a> {
    let marker = if selected { "▸ " } else { "  " };
    let name_style = if selected {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let status_line = Line::from(vec![
        Span::raw(marker.to_string()),
        Span::styled(
            format!("[{}]", event.status.label()),
            Style::default()
                .fg(status_color(&event.status))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {} at {}", event.formatted_date(), event.formatted_time()),
            Style::default().fg(theme.dim),
        ),
    ]);

    let teams_line = Line::from(vec![
        Span::raw("    "),
        Span::styled(team_with_score(&event.home_team, event.home_score), name_style),
        Span::styled("  vs  ", Style::default().fg(theme.dim)),
        Span::styled(team_with_score(&event.away_team, event.away_score), name_style),
    ]);

    let info_line = Line::from(vec![
        Span::raw("    "),
        Span::styled(
            event.sport.clone(),
            Style::default().fg(sport_color(&event.sport)),
        ),
        Span::styled(
            format!("  {} · {}", event.competition, event.location),
            Style::default().fg(theme.dim),
        ),
    ]);

    ListItem::new(vec![status_line, teams_line, info_line, Line::raw("")])
}

fn team_with_score(name: &str, score: Option<i64>) -> String {
    match score {
        Some(s) => format!("{name} {s}"),
        None => name.to_string(),
    }
}

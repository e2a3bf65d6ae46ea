use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use crate::app::App;
use crate::model::chat::ChatSender;
use crate::ui::theme::Theme;
use crate::util::markdown;

pub fn render(f: &mut Frame, area: Rect, app: &App, theme: &Theme) {
    let msg_count = app.chat_messages.len();

    if app.chat_minimized {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.chat_border))
            .title(format!(" Chat ({msg_count}) — m to expand "));
        f.render_widget(block, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2) as usize;

    let mut all_lines: Vec<Line> = Vec::new();

    for msg in &app.chat_messages {
        let header = match msg.sender {
            ChatSender::User => Span::styled(
                "you",
                Style::default()
                    .fg(theme.user)
                    .add_modifier(Modifier::BOLD),
            ),
            ChatSender::Bot => Span::styled(
                "assistant",
                Style::default().fg(theme.bot).add_modifier(Modifier::BOLD),
            ),
        };
        all_lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", msg.timestamp),
                Style::default().fg(theme.dim),
            ),
            header,
        ]));

        // Bot replies are Markdown; user messages render as plain text
        match msg.sender {
            ChatSender::Bot => {
                for line in markdown::to_lines(&msg.text) {
                    let mut spans = vec![Span::raw("  ")];
                    spans.extend(line.spans);
                    all_lines.push(Line::from(spans));
                }
            }
            ChatSender::User => {
                for text_line in msg.text.lines() {
                    all_lines.push(Line::from(Span::styled(
                        format!("  {text_line}"),
                        Style::default().fg(theme.user),
                    )));
                }
            }
        }

        // Blank line between messages
        all_lines.push(Line::raw(""));
    }

    if app.typing_indicator_visible() {
        all_lines.push(Line::from(Span::styled(
            "  typing...",
            Style::default()
                .fg(theme.dim)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    // Auto-scroll to bottom
    let total = all_lines.len();
    let skip = total.saturating_sub(visible_height);
    let visible_lines: Vec<Line> = all_lines
        .into_iter()
        .skip(skip)
        .take(visible_height)
        .collect();

    let title = if msg_count > 0 {
        format!(" Chat ({msg_count}) ")
    } else {
        " Chat — press : to ask about fixtures and scores ".to_string()
    };

    let paragraph = Paragraph::new(visible_lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.chat_border))
                .title(title),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

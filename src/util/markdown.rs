use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

/// Map Markdown reply text to styled terminal lines. Handles the subset the
/// assistant actually emits: headings, bullet lists, block quotes, fenced code
/// blocks, and inline bold/italic/code. Anything else passes through as plain
/// text.
pub fn to_lines(text: &str) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    let mut in_code_block = false;

    for raw in text.lines() {
        let trimmed = raw.trim_start();

        if trimmed.starts_with("```") {
            in_code_block = !in_code_block;
            continue;
        }
        if in_code_block {
            lines.push(Line::from(Span::styled(raw.to_string(), code_style())));
            continue;
        }

        if let Some(heading) = heading_text(trimmed) {
            lines.push(Line::from(Span::styled(
                heading.to_string(),
                Style::default().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )));
        } else if let Some(item) = trimmed
            .strip_prefix("- ")
            .or_else(|| trimmed.strip_prefix("* "))
        {
            let mut spans = vec![Span::raw("• ")];
            spans.extend(inline_spans(item));
            lines.push(Line::from(spans));
        } else if let Some(quoted) = trimmed.strip_prefix("> ") {
            let mut spans = vec![Span::styled(
                "│ ".to_string(),
                Style::default().fg(Color::DarkGray),
            )];
            spans.extend(inline_spans(quoted));
            lines.push(Line::from(spans));
        } else {
            lines.push(Line::from(inline_spans(raw)));
        }
    }

    lines
}

/// Markdown reduced to plain text, for non-TUI output.
pub fn to_plain(text: &str) -> String {
    to_lines(text)
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|s| s.content.as_ref())
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn heading_text(line: &str) -> Option<&str> {
    let hashes = line.chars().take_while(|c| *c == '#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    line[hashes..].strip_prefix(' ')
}

fn code_style() -> Style {
    Style::default().fg(Color::Rgb(0xE5, 0xC0, 0x7B))
}

fn inline_spans(text: &str) -> Vec<Span<'static>> {
    let chars: Vec<char> = text.chars().collect();
    let mut spans = Vec::new();
    let mut plain = String::new();
    let mut i = 0;

    while i < chars.len() {
        if chars[i] == '`' {
            if let Some(end) = find_from(&chars, i + 1, '`') {
                flush(&mut spans, &mut plain);
                let content: String = chars[i + 1..end].iter().collect();
                spans.push(Span::styled(content, code_style()));
                i = end + 1;
                continue;
            }
        }
        if chars[i] == '*' && chars.get(i + 1) == Some(&'*') {
            if let Some(end) = find_double_star(&chars, i + 2) {
                flush(&mut spans, &mut plain);
                let content: String = chars[i + 2..end].iter().collect();
                spans.push(Span::styled(
                    content,
                    Style::default().add_modifier(Modifier::BOLD),
                ));
                i = end + 2;
                continue;
            }
        }
        if chars[i] == '*' {
            if let Some(end) = find_from(&chars, i + 1, '*') {
                flush(&mut spans, &mut plain);
                let content: String = chars[i + 1..end].iter().collect();
                spans.push(Span::styled(
                    content,
                    Style::default().add_modifier(Modifier::ITALIC),
                ));
                i = end + 1;
                continue;
            }
        }
        plain.push(chars[i]);
        i += 1;
    }

    flush(&mut spans, &mut plain);
    if spans.is_empty() {
        spans.push(Span::raw(""));
    }
    spans
}

fn flush(spans: &mut Vec<Span<'static>>, plain: &mut String) {
    if !plain.is_empty() {
        spans.push(Span::raw(std::mem::take(plain)));
    }
}

fn find_from(chars: &[char], from: usize, needle: char) -> Option<usize> {
    (from..chars.len()).find(|&i| chars[i] == needle)
}

fn find_double_star(chars: &[char], from: usize) -> Option<usize> {
    (from..chars.len().saturating_sub(1)).find(|&i| chars[i] == '*' && chars[i + 1] == '*')
}

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use youth_events_hub::app::AppState;

pub fn render(f: &mut Frame, app: &AppState, area: Rect) {
    let events = app.visible_events();
    let tomorrow_ids: Vec<i64> = app.store.happening_tomorrow().iter().map(|e| e.id).collect();

    let mut lines = Vec::new();

    if events.is_empty() {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![Span::styled(
            "No events found",
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::BOLD),
        )]));
        lines.push(Line::from(vec![Span::styled(
            "Try adjusting your search terms or create a new event ('a')",
            Style::default().fg(Color::DarkGray),
        )]));
    } else {
        let selected_base = Style::default()
            .bg(app.theme.selected_bg)
            .add_modifier(Modifier::BOLD);

        for (idx, event) in events.iter().enumerate() {
            let is_selected = idx == app.selected_index;
            let is_tomorrow = tomorrow_ids.contains(&event.id);

            let (schedule_style, title_style) = if is_selected {
                (
                    selected_base.fg(app.theme.selected_fg),
                    selected_base.fg(app.theme.selected_fg),
                )
            } else {
                (Style::default().fg(Color::Green), Style::default().fg(Color::White))
            };

            let cursor = if is_selected { ">" } else { " " };
            let schedule = format!(
                "{} {}",
                event.date.format("%b %d"),
                event.time.format("%H:%M")
            );

            let mut spans = vec![
                Span::styled(cursor, Style::default().fg(app.theme.selected_bg)),
                Span::styled(schedule, schedule_style),
                Span::raw(" "),
                Span::styled(&event.title, title_style),
            ];
            if is_tomorrow {
                spans.push(Span::raw(" "));
                spans.push(Span::styled(
                    "🔔 tomorrow",
                    Style::default().fg(app.theme.reminder),
                ));
            }
            lines.push(Line::from(spans));

            let detail_style = if is_selected {
                Style::default().bg(app.theme.selected_bg).fg(Color::DarkGray)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            lines.push(Line::from(vec![
                Span::raw("  "),
                Span::styled(&event.ministry, Style::default().fg(app.theme.ministry_badge)),
                Span::styled(
                    format!(" @ {} | {} attendees | {}", event.venue, event.attendees, event.status),
                    detail_style,
                ),
            ]));

            if !event.description.is_empty() {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(&event.description, Style::default().fg(Color::DarkGray)),
                ]));
            }

            lines.push(Line::from(""));
        }
    }

    let block_title = format!(" Events ({}) ", events.len());
    let content = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(block_title),
    );
    f.render_widget(content, area);
}

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use youth_events_hub::app::AppState;

pub fn render(f: &mut Frame, app: &AppState, area: Rect) {
    let stats = app.store.stats();

    let tiles = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    render_tile(f, app, tiles[0], "Upcoming Events", stats.upcoming_events as u64);
    render_tile(f, app, tiles[1], "Total Attendees", stats.total_attendees);
    render_tile(f, app, tiles[2], "Active Ministries", stats.active_ministries as u64);
    render_tile(f, app, tiles[3], "Tomorrow's Events", stats.tomorrow_events as u64);
}

fn render_tile(f: &mut Frame, app: &AppState, area: Rect, label: &str, value: u64) {
    let lines = vec![
        Line::from(vec![Span::styled(
            value.to_string(),
            Style::default()
                .fg(app.theme.stat_value)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(label.to_string()),
    ];

    let tile = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(tile, area);
}

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use youth_events_hub::app::AppState;
use youth_events_hub::store::MinistryFilter;

pub fn render(f: &mut Frame, app: &AppState, area: Rect) {
    let mut spans = Vec::new();

    for ministry in app.store.ministries() {
        let is_active = matches!(
            &app.ministry_filter,
            MinistryFilter::Ministry(name) if name == ministry
        );

        let style = if is_active {
            Style::default()
                .bg(app.theme.selected_bg)
                .fg(app.theme.selected_fg)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.ministry_badge)
        };

        spans.push(Span::styled(format!(" {} ", ministry), style));
        spans.push(Span::raw(" "));
    }

    spans.push(Span::styled(
        "('f' to filter, 'm' to add)",
        Style::default().fg(Color::DarkGray),
    ));

    let block_title = format!(" Our Ministries ({}) ", app.store.ministries().len());
    let bar = Paragraph::new(Line::from(spans))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(block_title));
    f.render_widget(bar, area);
}

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::{dialogs, views};
use youth_events_hub::app::{AppState, Mode, ToastKind};

pub fn ui(f: &mut Frame, app: &AppState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(4),
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(4),
            Constraint::Length(3),
        ])
        .split(f.size());

    let tomorrow_count = app.store.happening_tomorrow().len();
    let title_text = if tomorrow_count > 0 {
        format!(
            "PCEA St. Andrew's Youth - Event Management | 🔔 {} tomorrow",
            tomorrow_count
        )
    } else {
        "PCEA St. Andrew's Youth - Event Management".to_string()
    };

    let title = Paragraph::new(title_text)
        .style(
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(title, chunks[0]);

    views::stats::render(f, app, chunks[1]);
    render_search_bar(f, app, chunks[2]);
    views::event_list::render(f, app, chunks[3]);
    views::ministry_bar::render(f, app, chunks[4]);
    render_status_bar(f, app, chunks[5]);

    if app.event_form.is_some() {
        dialogs::event_form::render(f, app);
    }

    if app.mode == Mode::MinistryForm {
        dialogs::ministry_form::render(f, app);
    }

    if app.pending_delete.is_some() {
        dialogs::delete_confirmation::render(f, app);
    }
}

fn render_search_bar(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let searching = app.mode == Mode::Search;
    let search_text = if searching {
        format!("/{}_", app.search_input)
    } else if app.search_input.is_empty() {
        "Search events, ministries, or venues ('/' to type)".to_string()
    } else {
        format!("/{}", app.search_input)
    };

    let bar = format!(
        "{}  |  Ministry: {}",
        search_text,
        app.ministry_filter.label()
    );

    let style = if searching {
        Style::default().fg(app.theme.selected_fg)
    } else {
        Style::default().fg(app.theme.status_bar)
    };

    let search = Paragraph::new(bar)
        .style(style)
        .block(Block::default().borders(Borders::ALL).title(" Discover Events "));
    f.render_widget(search, area);
}

fn render_status_bar(f: &mut Frame, app: &AppState, area: ratatui::layout::Rect) {
    let (status_text, status_color) = match app.latest_toast() {
        Some(toast) => {
            let color = match toast.kind {
                ToastKind::Success => app.theme.success,
                ToastKind::Error => app.theme.error,
                ToastKind::Reminder => app.theme.reminder,
            };
            (toast.message.clone(), color)
        }
        None => (
            format!(
                "Events: {} | a=add e=edit x=delete /=search f=filter m=ministry q=quit",
                app.store.events().len()
            ),
            app.theme.status_bar,
        ),
    };

    let status = Paragraph::new(status_text)
        .style(Style::default().fg(status_color))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(status, area);
}

use ratatui::{
    Frame,
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use youth_events_hub::app::{AppState, FormField};

pub fn render(f: &mut Frame, app: &AppState) {
    let Some(form) = &app.event_form else {
        return;
    };

    let area = f.size();
    let form_width = 70;
    let form_height = 18;
    let x = (area.width.saturating_sub(form_width)) / 2;
    let y = (area.height.saturating_sub(form_height)) / 2;

    let form_area = ratatui::layout::Rect {
        x,
        y,
        width: form_width,
        height: form_height,
    };

    f.render_widget(Clear, form_area);

    let active_color = app.theme.selected_bg;
    let inactive_color = Color::DarkGray;
    let field_color = |field: FormField| {
        if form.active_field == field {
            active_color
        } else {
            inactive_color
        }
    };

    let form_title = if form.is_editing() {
        "Edit Event"
    } else {
        "Create New Event"
    };

    let ministry_label = match &form.ministry {
        Some(name) => format!("◂ {} ▸", name),
        None => "◂ select ministry ▸".to_string(),
    };

    let form_text = vec![
        Line::from(vec![Span::styled(
            form_title,
            Style::default()
                .fg(app.theme.title)
                .add_modifier(Modifier::BOLD),
        )]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Title: ", Style::default().fg(field_color(FormField::Title))),
            Span::raw(&form.title),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "Ministry: ",
                Style::default().fg(field_color(FormField::Ministry)),
            ),
            Span::raw(ministry_label),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Date: ", Style::default().fg(field_color(FormField::Date))),
            Span::raw(&form.date_input),
            Span::styled(
                if form.active_field == FormField::Date {
                    " (YYYY-MM-DD)"
                } else {
                    ""
                },
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Time: ", Style::default().fg(field_color(FormField::Time))),
            Span::raw(&form.time_input),
            Span::styled(
                if form.active_field == FormField::Time {
                    " (HH:MM)"
                } else {
                    ""
                },
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Venue: ", Style::default().fg(field_color(FormField::Venue))),
            Span::raw(&form.venue),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "Description: ",
                Style::default().fg(field_color(FormField::Description)),
            ),
            Span::raw(&form.description),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(" = Next field | "),
            Span::styled("◂ ▸", Style::default().fg(Color::Cyan)),
            Span::raw(" = Pick ministry | "),
            Span::styled("Enter", Style::default().fg(Color::Green)),
            Span::raw(" = Save | "),
            Span::styled("Esc", Style::default().fg(Color::Red)),
            Span::raw(" = Cancel"),
        ]),
    ];

    let block_title = if form.is_editing() {
        " Edit Event "
    } else {
        " New Event "
    };

    let form_paragraph = Paragraph::new(form_text)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(block_title)
                .style(Style::default().bg(Color::Black)),
        )
        .alignment(Alignment::Left);

    f.render_widget(form_paragraph, form_area);
}

use std::io;

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event as TermEvent, KeyCode, KeyEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::tui::presentation::ui;
use youth_events_hub::{
    app::{AppState, Mode},
    input::{insert_mode, normal_mode, search_mode},
    ui::theme::Theme,
};

pub fn run_dashboard(theme: Theme) -> Result<(), io::Error> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = AppState::new().with_theme(theme);

    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("Error: {:?}", err);
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut AppState,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let TermEvent::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match app.mode {
                Mode::Browse => match key.code {
                    KeyCode::Char('q') => return Ok(()),
                    code => normal_mode::handle_key(code, app),
                },
                Mode::Search => search_mode::handle_key(key.code, app),
                Mode::EventForm => match key.code {
                    KeyCode::Esc => app.cancel_dialog(),
                    KeyCode::Enter => app.submit_event_form(),
                    code => insert_mode::handle_key(code, app),
                },
                Mode::MinistryForm => handle_ministry_form(key.code, app),
                Mode::ConfirmDelete => handle_delete_confirmation(key.code, app),
            }
        }
    }
}

fn handle_ministry_form(code: KeyCode, app: &mut AppState) {
    match code {
        KeyCode::Enter => app.submit_ministry_form(),
        KeyCode::Esc => app.cancel_dialog(),
        KeyCode::Backspace => {
            app.ministry_input.pop();
        }
        KeyCode::Char(c) => app.ministry_input.push(c),
        _ => {}
    }
}

fn handle_delete_confirmation(code: KeyCode, app: &mut AppState) {
    match code {
        KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_delete(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_dialog(),
        _ => {}
    }
}

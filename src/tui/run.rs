use std::io;
use std::time::Duration;

use crossterm::event::{poll, read, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::{Backend, CrosstermBackend};
use ratatui::Terminal;
use tracing::{debug, info};

use super::state::TuiState;
use super::views::{draw_dashboard, draw_help_overlay};
use crate::dashboard::DashboardView;
use crate::theme::Palette;

type Term = Terminal<CrosstermBackend<io::Stdout>>;

pub fn run(view: &DashboardView, theme_index: usize, palette: Option<Palette>) -> io::Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        let _ = disable_raw_mode();
        return Err(e);
    }

    let result = Terminal::new(CrosstermBackend::new(stdout)).and_then(|mut terminal| {
        let outcome = event_loop(&mut terminal, view, TuiState::new(theme_index, palette));
        restore_cursor(&mut terminal, outcome)
    });

    let _ = execute!(io::stdout(), LeaveAlternateScreen);
    disable_raw_mode()?;
    result
}

fn event_loop(terminal: &mut Term, view: &DashboardView, mut state: TuiState) -> io::Result<()> {
    terminal.clear()?;
    terminal.hide_cursor()?;

    loop {
        let theme = state.theme();
        terminal.draw(|f| {
            let size = f.size();
            if state.show_help {
                draw_help_overlay(f, size);
            } else {
                draw_dashboard(f, size, view, &theme);
            }
        })?;

        if !poll(Duration::from_millis(200))? {
            continue;
        }
        match read()? {
            Event::Key(key_event) => {
                if key_event.kind != KeyEventKind::Press {
                    continue;
                }
                match key_event.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('t') => {
                        state.cycle_theme();
                        info!(theme = state.theme().name, "theme changed");
                    }
                    KeyCode::Char('h') | KeyCode::F(1) => state.show_help = !state.show_help,
                    _ => {}
                }
            }
            Event::Resize(cols, rows) => {
                debug!(cols, rows, "terminal resized");
                terminal.autoresize()?;
            }
            _ => {}
        }
    }

    Ok(())
}

/// Shows the cursor again whether or not the loop failed; the loop's error
/// wins over a cursor error.
fn restore_cursor<B: Backend>(terminal: &mut Terminal<B>, outcome: io::Result<()>) -> io::Result<()> {
    let shown = terminal.show_cursor();
    outcome.and(shown)
}

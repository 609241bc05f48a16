//! TUI mode execution

use super::{
    SessionData, SessionError,
    messages::{print_session_exit_success, print_session_starting},
    setup::spawn_loader,
};
use crate::ui::{self, UIConfig};
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Runs the application in TUI mode
///
/// This function handles:
/// 1. Starting the background dataset load
/// 2. Terminal setup and cleanup
/// 3. UI application initialization and execution
///
/// The terminal is restored before any error is returned.
pub async fn run_tui_mode(
    session: SessionData,
    with_background: bool,
) -> Result<(), SessionError> {
    let dataset_source = session.source.describe();
    print_session_starting(&dataset_source);

    let loader = spawn_loader(&session);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let ui_config = UIConfig::new(with_background, dataset_source);
    let app = ui::App::new(
        session.config.clone(),
        loader.event_receiver,
        loader.dataset_receiver,
        ui_config,
    );

    let result = ui::run(&mut terminal, app).await;

    // Clean up the terminal after running the application
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    let renders = result?;
    print_session_exit_success(renders);

    Ok(())
}

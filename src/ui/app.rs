//! Main application state and UI loop
//!
//! Contains the App struct and main UI event handling logic

use crate::config::Config;
use crate::consts::cli_consts::{SPLASH_DURATION_MS, UI_POLL_INTERVAL_MS};
use crate::dataset::{Dataset, LoadError};
use crate::events::Event as DashboardEvent;
use crate::session::SessionError;
use crate::ui::dashboard::{DashboardState, render_dashboard};
use crate::ui::splash::render_splash;
use crossterm::event::{self, Event, KeyCode};
use ratatui::{Frame, Terminal, backend::Backend};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::{mpsc, oneshot};

/// UI configuration data grouped by concern
#[derive(Debug, Clone)]
pub struct UIConfig {
    pub with_background_color: bool,
    /// Human-readable dataset location for the header.
    pub dataset_source: String,
}

impl UIConfig {
    pub fn new(with_background_color: bool, dataset_source: String) -> Self {
        Self {
            with_background_color,
            dataset_source,
        }
    }
}

/// The different screens in the application.
#[derive(Debug)]
pub enum Screen {
    /// Splash screen shown while the dataset loads.
    Splash,
    /// The sentiment dashboard.
    Dashboard(Box<DashboardState>),
}

/// Application state
#[derive(Debug)]
pub struct App {
    /// The start time of the application, used for computing uptime.
    start_time: Instant,

    /// Session configuration shared with every render pass.
    config: Arc<Config>,

    /// The current screen being displayed in the application.
    current_screen: Screen,

    /// Receives progress events from the loader task.
    event_receiver: mpsc::Receiver<DashboardEvent>,

    /// Receives the dataset once loading finishes.
    dataset_receiver: oneshot::Receiver<Result<Dataset, LoadError>>,

    /// Set once the loader has delivered.
    dataset: Option<Arc<Dataset>>,

    /// Events received before the dashboard exists.
    early_events: Vec<DashboardEvent>,

    ui_config: UIConfig,
}

impl App {
    /// Creates a new instance of the application.
    pub fn new(
        config: Arc<Config>,
        event_receiver: mpsc::Receiver<DashboardEvent>,
        dataset_receiver: oneshot::Receiver<Result<Dataset, LoadError>>,
        ui_config: UIConfig,
    ) -> Self {
        Self {
            start_time: Instant::now(),
            config,
            current_screen: Screen::Splash,
            event_receiver,
            dataset_receiver,
            dataset: None,
            early_events: Vec::new(),
            ui_config,
        }
    }

    /// Render passes run by the dashboard so far.
    pub fn render_count(&self) -> usize {
        match &self.current_screen {
            Screen::Splash => 0,
            Screen::Dashboard(state) => state.render_count,
        }
    }

    /// Whether the dataset is ready to show.
    pub fn is_loaded(&self) -> bool {
        self.dataset.is_some()
    }

    /// Queue incoming loader events and pick up the dataset if it arrived.
    ///
    /// A failed load ends the session.
    fn poll_loader(&mut self) -> Result<(), SessionError> {
        while let Ok(event) = self.event_receiver.try_recv() {
            match &mut self.current_screen {
                Screen::Dashboard(state) => state.add_event(event),
                Screen::Splash => self.early_events.push(event),
            }
        }

        if self.dataset.is_none() {
            match self.dataset_receiver.try_recv() {
                Ok(Ok(dataset)) => self.dataset = Some(Arc::new(dataset)),
                Ok(Err(e)) => return Err(SessionError::Load(e)),
                Err(oneshot::error::TryRecvError::Empty) => {}
                Err(oneshot::error::TryRecvError::Closed) => {
                    return Err(SessionError::LoaderClosed);
                }
            }
        }
        Ok(())
    }

    /// Switch from the splash screen to the dashboard. No-op until the
    /// dataset is loaded.
    fn enter_dashboard(&mut self) {
        let Some(dataset) = self.dataset.clone() else {
            return;
        };
        let mut state = DashboardState::new(
            dataset,
            Arc::clone(&self.config),
            self.start_time,
            self.ui_config.clone(),
        );
        // Loader events precede the first render pass in the log.
        for event in self.early_events.drain(..).rev() {
            state.pending_events.push_front(event);
        }
        self.current_screen = Screen::Dashboard(Box::new(state));
    }
}

/// Runs the application UI in a loop, handling events and rendering the appropriate screen.
///
/// Returns the number of render passes when the user quits.
pub async fn run<B: Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
) -> Result<usize, SessionError> {
    let splash_start = Instant::now();
    let splash_duration = Duration::from_millis(SPLASH_DURATION_MS);

    loop {
        app.poll_loader()?;

        if let Screen::Dashboard(state) = &mut app.current_screen {
            state.update();
        }
        let loaded = app.is_loaded();
        terminal.draw(|f| render(f, &app.current_screen, loaded))?;

        // Leave the splash once loaded and shown long enough.
        if let Screen::Splash = app.current_screen {
            if loaded && splash_start.elapsed() >= splash_duration {
                app.enter_dashboard();
                continue;
            }
        }

        if event::poll(Duration::from_millis(UI_POLL_INTERVAL_MS))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == event::KeyEventKind::Release {
                    continue;
                }

                if matches!(key.code, KeyCode::Esc | KeyCode::Char('q')) {
                    return Ok(app.render_count());
                }

                if let Screen::Dashboard(state) = &mut app.current_screen {
                    state.handle_key(key.code);
                } else {
                    // Any key skips the splash once the dataset is ready.
                    app.enter_dashboard();
                }
            }
        }
        // Let the loader task make progress on single-threaded runtimes.
        tokio::task::yield_now().await;
    }
}

/// Renders the current screen based on the application state.
fn render(f: &mut Frame, screen: &Screen, loaded: bool) {
    match screen {
        Screen::Splash => render_splash(f, loaded),
        Screen::Dashboard(state) => render_dashboard(f, state),
    }
}

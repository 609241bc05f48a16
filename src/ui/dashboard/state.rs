//! Dashboard state management
//!
//! Contains the main dashboard state struct

use crate::chart::{Chart, RenderError};
use crate::config::Config;
use crate::consts::cli_consts::MAX_ACTIVITY_LOGS;
use crate::controller::Selection;
use crate::dataset::Dataset;
use crate::events::Event;
use crate::ui::UIConfig;

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Instant;

/// Dashboard state: the loaded dataset, the side-panel selection and the
/// outcome of the latest render pass.
#[derive(Debug)]
pub struct DashboardState {
    /// Read-only dataset shared for the whole session.
    pub dataset: Arc<Dataset>,
    /// Session configuration.
    pub config: Arc<Config>,
    /// Where the dataset was read from.
    pub dataset_source: String,
    /// The start time of the application, used for computing uptime.
    pub start_time: Instant,
    /// Current side-panel selection.
    pub selection: Selection,
    /// Result of the latest render pass.
    pub chart: Result<Chart, RenderError>,
    /// Number of render passes run so far.
    pub render_count: usize,
    /// Queue of events waiting to be processed
    pub pending_events: VecDeque<Event>,
    /// Activity logs for display
    pub activity_logs: VecDeque<Event>,
    /// Whether to enable background colors
    pub with_background_color: bool,
}

impl DashboardState {
    /// Creates the dashboard and runs the first render pass for the default
    /// selection.
    pub fn new(
        dataset: Arc<Dataset>,
        config: Arc<Config>,
        start_time: Instant,
        ui_config: UIConfig,
    ) -> Self {
        let mut state = Self {
            dataset,
            config,
            dataset_source: ui_config.dataset_source,
            start_time,
            selection: Selection::default(),
            // Replaced by the first render pass below.
            chart: Err(RenderError::UnknownLabel {
                label: String::new(),
            }),
            render_count: 0,
            pending_events: VecDeque::new(),
            activity_logs: VecDeque::new(),
            with_background_color: ui_config.with_background_color,
        };
        state.rerender();
        state
    }

    /// Add an event to activity logs with size limit
    pub fn add_to_activity_log(&mut self, event: Event) {
        if self.activity_logs.len() >= MAX_ACTIVITY_LOGS {
            self.activity_logs.pop_front();
        }
        self.activity_logs.push_back(event);
    }

    /// Add an event to the processing queue
    pub fn add_event(&mut self, event: Event) {
        self.pending_events.push_back(event);
    }
}

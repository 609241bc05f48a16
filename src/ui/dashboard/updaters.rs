//! Dashboard state update logic
//!
//! Contains all methods for updating dashboard state from key presses and
//! queued events

use super::state::DashboardState;

use crate::controller::{Controller, VisualizationKind};
use crate::events::{Event, EventType};
use crate::logging::LogLevel;
use crate::sentiment::Sentiment;

use crossterm::event::KeyCode;
use std::time::Instant;

impl DashboardState {
    /// Move queued events into the activity log.
    pub fn update(&mut self) {
        while let Some(event) = self.pending_events.pop_front() {
            self.add_to_activity_log(event);
        }
    }

    /// Apply a key press to the side panel. Returns whether the selection
    /// changed.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        let kind = self.selection.kind;
        let sentiment = self.selection.sentiment;
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.select_kind(cycle(
                &VisualizationKind::ALL,
                kind.index(),
                -1,
            )),
            KeyCode::Down | KeyCode::Char('j') => self.select_kind(cycle(
                &VisualizationKind::ALL,
                kind.index(),
                1,
            )),
            KeyCode::Char(c @ '1'..='4') => {
                let index = c as usize - '1' as usize;
                self.select_kind(VisualizationKind::ALL[index])
            }
            // The sentiment selector only exists for per-class charts.
            _ if !kind.needs_sentiment() => false,
            KeyCode::Left | KeyCode::Char('h') => {
                self.select_sentiment(cycle(&Sentiment::ALL, sentiment.index(), -1))
            }
            KeyCode::Right | KeyCode::Char('l') => {
                self.select_sentiment(cycle(&Sentiment::ALL, sentiment.index(), 1))
            }
            KeyCode::Char('p') => self.select_sentiment(Sentiment::Positive),
            KeyCode::Char('n') => self.select_sentiment(Sentiment::Negative),
            KeyCode::Char('t') => self.select_sentiment(Sentiment::Neutral),
            _ => false,
        }
    }

    /// Switch the visualization kind, re-rendering on change.
    pub fn select_kind(&mut self, kind: VisualizationKind) -> bool {
        if self.selection.kind == kind {
            return false;
        }
        self.selection.kind = kind;
        self.selection_changed()
    }

    /// Switch the sentiment class, re-rendering on change.
    pub fn select_sentiment(&mut self, sentiment: Sentiment) -> bool {
        if self.selection.sentiment == sentiment {
            return false;
        }
        self.selection.sentiment = sentiment;
        self.selection_changed()
    }

    fn selection_changed(&mut self) -> bool {
        self.add_event(Event::controls_with_level(
            format!("Selected {}", self.selection),
            EventType::Refresh,
            LogLevel::Debug,
        ));
        self.rerender();
        true
    }

    /// Run a full render pass for the current selection.
    pub fn rerender(&mut self) {
        let started = Instant::now();
        let controller = Controller::new(&self.dataset, &self.config);
        self.chart = controller.render(self.selection);
        self.render_count += 1;

        let event = match &self.chart {
            Ok(chart) => Event::renderer_with_level(
                format!(
                    "Rendered {} in {} ms",
                    chart.title,
                    started.elapsed().as_millis()
                ),
                EventType::Success,
                LogLevel::Info,
            ),
            Err(err) => Event::renderer_with_level(
                format!("Render failed: {}", err),
                EventType::Error,
                LogLevel::Warn,
            ),
        };
        self.add_event(event);
    }
}

/// Step through `items` from `index`, wrapping at both ends.
fn cycle<T: Copy>(items: &[T], index: usize, step: isize) -> T {
    let len = items.len() as isize;
    let next = (index as isize + step).rem_euclid(len);
    items[next as usize]
}

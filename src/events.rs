//! Event System
//!
//! Types and implementations for dashboard events and logging

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Source {
    /// Background task that reads the dataset from disk.
    Loader,
    /// Side panel selection changes.
    Controls,
    /// Chart computation for a render pass.
    Renderer,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Error,
    Refresh,
    Waiting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub source: Source,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(source: Source, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            source,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn loader_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Loader, msg, event_type, log_level)
    }

    pub fn controls_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Controls, msg, event_type, log_level)
    }

    pub fn renderer_with_level(msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self::new(Source::Renderer, msg, event_type, log_level)
    }

    pub fn should_display(&self) -> bool {
        // Always show success events and info level events
        if self.event_type == EventType::Success || self.log_level >= LogLevel::Info {
            return true;
        }
        should_log_with_env(self.log_level)
    }
}

impl Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.event_type, self.timestamp, self.msg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn errors_and_successes_are_always_displayed() {
        let success = Event::renderer_with_level(
            "Rendered".to_string(),
            EventType::Success,
            LogLevel::Debug,
        );
        let error = Event::loader_with_level(
            "Missing column".to_string(),
            EventType::Error,
            LogLevel::Error,
        );
        assert!(success.should_display());
        assert!(error.should_display());
    }

    #[test]
    fn display_includes_type_and_message() {
        let event = Event::controls_with_level(
            "Selected Top Words".to_string(),
            EventType::Refresh,
            LogLevel::Info,
        );
        let rendered = event.to_string();
        assert!(rendered.starts_with("Refresh ["));
        assert!(rendered.ends_with("Selected Top Words"));
        assert_eq!(event.source, Source::Controls);
    }
}

//! Activity events
//!
//! Entries shown in the dashboard's activity log panel

use crate::logging::{LogLevel, should_log_with_env};
use chrono::Local;
use std::fmt::Display;

/// Which part of the dashboard produced an event.
#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum Origin {
    /// Tab switches, search edits and accordion toggles.
    Navigation,
    /// Changes to the company selection set.
    Selection,
    /// Bulk action bar buttons.
    BulkAction,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, strum::Display)]
pub enum EventType {
    Success,
    Info,
    /// The requested action has no effect in this build.
    Unavailable,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub origin: Origin,
    pub msg: String,
    pub timestamp: String,
    pub event_type: EventType,
    pub log_level: LogLevel,
}

impl Event {
    fn new(origin: Origin, msg: String, event_type: EventType, log_level: LogLevel) -> Self {
        Self {
            origin,
            msg,
            timestamp: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            event_type,
            log_level,
        }
    }

    pub fn navigation(msg: impl Into<String>) -> Self {
        Self::new(Origin::Navigation, msg.into(), EventType::Info, LogLevel::Info)
    }

    pub fn selection(msg: impl Into<String>) -> Self {
        Self::new(Origin::Selection, msg.into(), EventType::Success, LogLevel::Info)
    }

    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::new(
            Origin::BulkAction,
            msg.into(),
            EventType::Unavailable,
            LogLevel::Warn,
        )
    }

    pub fn should_display(&self) -> bool {
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

//! Effects (side effects as data).
//!
//! The transition function only describes work; [`crate::Controller`] runs it.

use shared::SearchName;

use crate::session::LookupSeq;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Issue one lookup for `name`, resolving back as `Event::LookupResolved`
    /// tagged with `lookup`.
    Lookup { lookup: LookupSeq, name: SearchName },

    Log { level: LogLevel, message: String },
}

impl Effect {
    pub(crate) fn log(level: LogLevel, message: impl Into<String>) -> Self {
        Self::Log {
            level,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

//! Pure state transition function.
//!
//! Takes the current session and an event, returns the next session and the
//! effects to run. No I/O happens here.
//!
//! Handlers are split by stage group, each with co-located tests:
//! - `search`: submit and lookup resolution (Idle through Error)
//! - `drill_down`: semester and class selection

mod drill_down;
mod search;

use crate::effect::{Effect, LogLevel};
use crate::event::Event;
use crate::session::Session;

#[derive(Debug, Clone, PartialEq)]
pub struct TransitionResult {
    pub session: Session,
    pub effects: Vec<Effect>,
}

impl TransitionResult {
    pub fn new(session: Session, effects: Vec<Effect>) -> Self {
        Self { session, effects }
    }

    pub fn no_change(session: Session) -> Self {
        Self {
            session,
            effects: vec![],
        }
    }

    /// Leave the session untouched and record why.
    pub(crate) fn ignored(session: Session, level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            session,
            effects: vec![Effect::log(level, message)],
        }
    }
}

pub fn transition(session: Session, event: Event) -> TransitionResult {
    match event {
        Event::Back => TransitionResult::no_change(session.reset()),
        Event::Submit { name } => search::submit(session, &name),
        Event::LookupResolved { lookup, outcome } => search::resolve(session, lookup, outcome),
        Event::SelectSemester(selection) => drill_down::select_semester(session, selection),
        Event::SelectClass(selection) => drill_down::select_class(session, selection),
    }
}

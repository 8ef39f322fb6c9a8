//! Events that drive the navigation state machine.
//!
//! Four come from the rendering layer (submit, two selectors, back); one comes
//! back from the lookup client.

use client_core::LookupOutcome;
use shared::{ClassId, SemesterId};

use crate::session::LookupSeq;

/// Value picked in a selector: a record id, or the placeholder entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection<T> {
    Sentinel,
    Chosen(T),
}

impl<T: From<String>> Selection<T> {
    /// Interpret a raw selector value. An empty value is the placeholder.
    pub fn from_value(value: &str) -> Self {
        let value = value.trim();
        if value.is_empty() {
            Self::Sentinel
        } else {
            Self::Chosen(T::from(value.to_string()))
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    /// Search trigger (button or Enter) with the raw input text.
    Submit { name: String },

    /// A lookup finished. Ignored unless `lookup` is the one being awaited.
    LookupResolved {
        lookup: LookupSeq,
        outcome: LookupOutcome,
    },

    SelectSemester(Selection<SemesterId>),

    SelectClass(Selection<ClassId>),

    /// Back control: full reset to the search stage.
    Back,
}

impl Event {
    /// One-line description that leaves out student records.
    pub fn log_summary(&self) -> String {
        match self {
            Event::Submit { name } => format!("Submit {{ name: {:?} }}", name.trim()),
            Event::LookupResolved { lookup, outcome } => {
                format!("LookupResolved {{ lookup: {lookup}, outcome: {} }}", outcome.kind())
            }
            Event::SelectSemester(Selection::Sentinel) => "SelectSemester(sentinel)".to_string(),
            Event::SelectSemester(Selection::Chosen(id)) => format!("SelectSemester({id})"),
            Event::SelectClass(Selection::Sentinel) => "SelectClass(sentinel)".to_string(),
            Event::SelectClass(Selection::Chosen(id)) => format!("SelectClass({id})"),
            Event::Back => "Back".to_string(),
        }
    }
}

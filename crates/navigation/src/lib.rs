//! Progressive-disclosure navigation: student search, then semester, class and
//! grade drill-down.
//!
//! The pieces mirror a small effect system:
//! - [`Session`]: what the page currently knows
//! - [`Event`]: what the user or the network did
//! - [`Effect`]: what the caller must do next
//! - [`transition`]: pure `(Session, Event) -> (Session, Vec<Effect>)`
//! - [`present`]: read-only projection of a session into panels
//!
//! [`Controller`] wires them to a [`client_core::StudentLookup`].

pub mod controller;
pub mod effect;
pub mod event;
pub mod presenter;
pub mod session;
pub mod transition;

pub use controller::Controller;
pub use effect::{Effect, LogLevel};
pub use event::{Event, Selection};
pub use presenter::{present, PanelLayout, PanelView};
pub use session::{LookupSeq, Session, Stage, StageKind};
pub use transition::{transition, TransitionResult};

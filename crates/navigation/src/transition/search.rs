//! Search-side transitions: submitting a name and resolving its lookup.

use client_core::LookupOutcome;
use shared::SearchName;

use super::TransitionResult;
use crate::effect::{Effect, LogLevel};
use crate::session::{LookupSeq, Session, Stage};

/// Start a new lookup, superseding any outstanding one.
///
/// Downstream selections are dropped before anything else so that no stale
/// selection survives a re-search.
pub fn submit(session: Session, raw_name: &str) -> TransitionResult {
    if !session.stage.accepts_search() {
        let message = format!(
            "Ignoring submit in stage {}: search panel is hidden",
            session.kind()
        );
        return TransitionResult::ignored(session, LogLevel::Warn, message);
    }

    let Ok(name) = SearchName::parse(raw_name) else {
        return TransitionResult::no_change(session.with_stage(Stage::Rejected));
    };

    let superseded = session.pending_lookup();
    let lookup = session.last_issued.next();
    let mut effects = Vec::with_capacity(2);
    if let Some(previous) = superseded {
        effects.push(Effect::log(
            LogLevel::Debug,
            format!("Lookup {previous} superseded by {lookup}"),
        ));
    }
    effects.push(Effect::Lookup {
        lookup,
        name: name.clone(),
    });

    TransitionResult::new(
        Session {
            stage: Stage::Searching { name, lookup },
            last_issued: lookup,
        },
        effects,
    )
}

/// Apply a lookup result if it answers the lookup currently awaited.
pub fn resolve(session: Session, lookup: LookupSeq, outcome: LookupOutcome) -> TransitionResult {
    let Session { stage, last_issued } = session;
    let name = match stage {
        Stage::Searching {
            name,
            lookup: awaited,
        } if awaited == lookup => name,
        stage => {
            let message = format!(
                "Ignoring stale resolution of lookup {lookup} ({}) in stage {}",
                outcome.kind(),
                stage.kind()
            );
            return TransitionResult::ignored(
                Session { stage, last_issued },
                LogLevel::Info,
                message,
            );
        }
    };

    let stage = match outcome {
        LookupOutcome::Found(student) => Stage::ShowingSemesters { student },
        LookupOutcome::NotFound => Stage::NotFound { name },
        LookupOutcome::Ambiguous(count) => Stage::Ambiguous { name, count },
        LookupOutcome::TransportError(detail) => Stage::Failed { name, detail },
        LookupOutcome::ValidationError => Stage::Rejected,
    };
    TransitionResult::no_change(Session { stage, last_issued })
}

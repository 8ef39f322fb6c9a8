//! Effect interpreter around the pure transition function.
//!
//! All transitions run on the caller's thread. Lookups are spawned on the
//! runtime handle given to [`Controller::new`] and come back through a channel, so a newer submit never waits for
//! an older request; the transition function discards whichever resolution is
//! no longer awaited.

use std::sync::Arc;

use client_core::StudentLookup;
use tokio::{runtime::Handle, sync::mpsc};
use tracing::{debug, error, info, warn};

use crate::effect::{Effect, LogLevel};
use crate::event::Event;
use crate::presenter::{present, PanelView};
use crate::session::Session;
use crate::transition::transition;

pub struct Controller {
    session: Session,
    lookup: Arc<dyn StudentLookup>,
    runtime: Handle,
    resolved_tx: mpsc::UnboundedSender<Event>,
    resolved_rx: mpsc::UnboundedReceiver<Event>,
}

impl Controller {
    /// `runtime` runs the lookups; [`Controller::handle`] itself may be called
    /// from any thread, inside that runtime or not.
    pub fn new(lookup: Arc<dyn StudentLookup>, runtime: Handle) -> Self {
        let (resolved_tx, resolved_rx) = mpsc::unbounded_channel();
        Self {
            session: Session::new(),
            lookup,
            runtime,
            resolved_tx,
            resolved_rx,
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn view(&self) -> PanelView {
        present(&self.session)
    }

    /// Apply one event and run its effects.
    pub fn handle(&mut self, event: Event) -> PanelView {
        let from = self.session.kind();
        let summary = event.log_summary();
        let result = transition(std::mem::take(&mut self.session), event);
        self.session = result.session;
        debug!(
            event = %summary,
            from = %from,
            to = %self.session.kind(),
            "navigation: transition"
        );
        for effect in result.effects {
            self.execute(effect);
        }
        self.view()
    }

    /// Wait for the next finished lookup, stale or not.
    pub async fn next_resolution(&mut self) -> Option<Event> {
        self.resolved_rx.recv().await
    }

    /// Feed finished lookups back in until none is outstanding.
    pub async fn settle(&mut self) -> PanelView {
        while self.session.pending_lookup().is_some() {
            match self.resolved_rx.recv().await {
                Some(event) => {
                    self.handle(event);
                }
                None => break,
            }
        }
        self.view()
    }

    fn execute(&self, effect: Effect) {
        match effect {
            Effect::Lookup { lookup, name } => {
                info!(lookup = %lookup, name = %name, "navigation: issuing lookup");
                let client = Arc::clone(&self.lookup);
                let resolved_tx = self.resolved_tx.clone();
                self.runtime.spawn(async move {
                    let outcome = client.search(name.as_str()).await;
                    if resolved_tx
                        .send(Event::LookupResolved { lookup, outcome })
                        .is_err()
                    {
                        debug!(lookup = %lookup, "navigation: controller gone, resolution dropped");
                    }
                });
            }
            Effect::Log { level, message } => match level {
                LogLevel::Debug => debug!("{}", message),
                LogLevel::Info => info!("{}", message),
                LogLevel::Warn => warn!("{}", message),
                LogLevel::Error => error!("{}", message),
            },
        }
    }
}

#[cfg(test)]
#[path = "tests/controller_tests.rs"]
mod tests;

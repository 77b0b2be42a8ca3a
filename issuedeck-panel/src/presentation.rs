//! Presentation context
//!
//! The one task that owns the [`PipelineController`]. Trigger events arrive on
//! one channel, fetch outcomes from worker tasks on another; both are applied
//! here in order, and every new state is published to views.

use std::sync::Arc;

use issuedeck_client::IssueSource;
use issuedeck_core::FetchOutcome;
use tokio::sync::{mpsc, watch};
use tracing::{info, warn};

use crate::controller::{Phase, PipelineController, PipelineState};

/// Input to the presentation context
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelEvent {
    /// The fetch button was pressed
    Trigger,
    /// The panel is closing
    Shutdown,
}

pub struct Presentation {
    controller: PipelineController,
    completions: mpsc::UnboundedReceiver<FetchOutcome>,
    state_tx: watch::Sender<PipelineState>,
}

impl Presentation {
    pub fn new(source: Arc<dyn IssueSource>) -> Self {
        let (completion_tx, completions) = mpsc::unbounded_channel();
        let controller = PipelineController::new(source, completion_tx);
        let (state_tx, _) = watch::channel(controller.state().clone());

        Self {
            controller,
            completions,
            state_tx,
        }
    }

    /// Read-only feed of state changes for views
    pub fn subscribe(&self) -> watch::Receiver<PipelineState> {
        self.state_tx.subscribe()
    }

    /// Runs the event loop until shutdown
    ///
    /// A fetch still in flight at shutdown is awaited and rendered before
    /// returning; requests are never cancelled.
    pub async fn run(mut self, mut events: mpsc::Receiver<PanelEvent>) {
        info!(
            "Issue panel initialized (source: {})",
            self.controller.source_location()
        );

        loop {
            // Queued input is handled before a completion that arrived after it
            tokio::select! {
                biased;
                event = events.recv() => match event {
                    Some(PanelEvent::Trigger) => {
                        self.trigger();
                    }
                    Some(PanelEvent::Shutdown) | None => break,
                },
                Some(outcome) = self.completions.recv() => self.apply(outcome),
            }
        }

        if self.controller.phase() == Phase::Fetching {
            info!("Waiting for in-flight fetch before closing");
            self.await_completion().await;
        }

        info!("Issue panel closed");
    }

    /// Runs one full trigger-to-render cycle in place
    pub async fn run_cycle(&mut self) -> &PipelineState {
        if self.trigger() {
            self.await_completion().await;
        }
        self.controller.state()
    }

    fn trigger(&mut self) -> bool {
        let accepted = self.controller.trigger();
        if accepted {
            self.publish();
        }
        accepted
    }

    fn apply(&mut self, outcome: FetchOutcome) {
        self.controller.complete(outcome);
        self.publish();
    }

    async fn await_completion(&mut self) {
        match self.completions.recv().await {
            Some(outcome) => self.apply(outcome),
            None => warn!("Completion channel closed while fetching"),
        }
    }

    fn publish(&self) {
        self.state_tx.send_replace(self.controller.state().clone());
    }
}

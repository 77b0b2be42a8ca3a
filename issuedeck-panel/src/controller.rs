//! Pipeline controller
//!
//! Two phases: `Idle` (trigger enabled) and `Fetching` (trigger disabled,
//! loading placeholder shown). Errors are not a separate phase; every outcome
//! is rendered into the display and the controller returns to `Idle`.

use std::sync::Arc;

use issuedeck_client::IssueSource;
use issuedeck_core::FetchOutcome;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Display text while a fetch is in flight
pub const LOADING_TEXT: &str = "Loading...";

/// What the view shows: one display string and the trigger's enabled flag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineState {
    pub trigger_enabled: bool,
    pub display_text: String,
}

impl Default for PipelineState {
    fn default() -> Self {
        Self {
            trigger_enabled: true,
            display_text: String::new(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Fetching,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Idle => write!(f, "Idle"),
            Phase::Fetching => write!(f, "Fetching"),
        }
    }
}

/// Owns the panel state and drives one fetch at a time
///
/// All mutation goes through `&mut self`, so only whoever owns the controller
/// (the presentation context) can change what the view shows. Fetch tasks
/// only ever hold a completion sender.
pub struct PipelineController {
    source: Arc<dyn IssueSource>,
    completions: mpsc::UnboundedSender<FetchOutcome>,
    phase: Phase,
    state: PipelineState,
}

impl PipelineController {
    /// Creates an idle controller
    ///
    /// # Arguments
    /// * `source` - Where issues are fetched from
    /// * `completions` - Channel the fetch task reports its outcome on
    pub fn new(
        source: Arc<dyn IssueSource>,
        completions: mpsc::UnboundedSender<FetchOutcome>,
    ) -> Self {
        Self {
            source,
            completions,
            phase: Phase::Idle,
            state: PipelineState::default(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &PipelineState {
        &self.state
    }

    pub fn source_location(&self) -> &str {
        self.source.location()
    }

    /// Handles a press of the fetch trigger
    ///
    /// Returns `false` and changes nothing if a fetch is already in flight.
    /// Must be called from within a tokio runtime.
    pub fn trigger(&mut self) -> bool {
        if !self.state.trigger_enabled {
            debug!("Fetch already in flight, ignoring trigger");
            return false;
        }

        self.phase = Phase::Fetching;
        self.state.trigger_enabled = false;
        self.state.display_text = LOADING_TEXT.to_string();

        debug!("Fetch triggered for {}", self.source.location());

        let source = Arc::clone(&self.source);
        let completions = self.completions.clone();
        tokio::spawn(async move {
            let outcome = source.fetch().await;
            if completions.send(outcome).is_err() {
                warn!("Panel closed before fetch completed, dropping outcome");
            }
        });

        true
    }

    /// Applies the outcome of the in-flight fetch
    ///
    /// Renders the outcome and re-enables the trigger whatever the variant.
    pub fn complete(&mut self, outcome: FetchOutcome) {
        if self.phase != Phase::Fetching {
            warn!("Received a fetch outcome while {}", self.phase);
        }

        info!(success = outcome.is_success(), "Fetch completed");

        self.state.display_text = outcome.render();
        self.state.trigger_enabled = true;
        self.phase = Phase::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::GatedSource;
    use issuedeck_core::IssueRecord;

    fn one_issue() -> FetchOutcome {
        FetchOutcome::Success(vec![IssueRecord::new(
            1,
            "Outdated dependency",
            "medium",
            "2025-08-20T10:15:00Z",
        )])
    }

    #[tokio::test]
    async fn test_new_controller_is_idle() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let controller = PipelineController::new(GatedSource::new(one_issue()), tx);

        assert_eq!(controller.phase(), Phase::Idle);
        assert_eq!(controller.state(), &PipelineState::default());
        assert_eq!(controller.source_location(), "fake://issues");
    }

    #[tokio::test]
    async fn test_trigger_disables_and_shows_loading() {
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut controller = PipelineController::new(GatedSource::new(one_issue()), tx);

        assert!(controller.trigger());
        assert_eq!(controller.phase(), Phase::Fetching);
        assert!(!controller.state().trigger_enabled);
        assert_eq!(controller.state().display_text, LOADING_TEXT);
    }

    #[tokio::test]
    async fn test_trigger_while_fetching_is_ignored() {
        let source = GatedSource::new(one_issue());
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut controller = PipelineController::new(source.clone(), tx);

        assert!(controller.trigger());
        assert!(!controller.trigger());
        assert_eq!(controller.state().display_text, LOADING_TEXT);

        source.open();
        let outcome = rx.recv().await.unwrap();
        controller.complete(outcome);

        assert_eq!(source.calls(), 1);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_every_outcome_returns_to_idle() {
        let outcomes = vec![
            one_issue(),
            FetchOutcome::transport_failure("connection refused"),
            FetchOutcome::http_failure(500, "internal error"),
            FetchOutcome::parse_failure("expected value", "{invalid json}"),
        ];

        for outcome in outcomes {
            let expected = outcome.render();
            let source = GatedSource::new(outcome);
            let (tx, mut rx) = mpsc::unbounded_channel();
            let mut controller = PipelineController::new(source.clone(), tx);

            controller.trigger();
            source.open();
            controller.complete(rx.recv().await.unwrap());

            assert_eq!(controller.phase(), Phase::Idle);
            assert!(controller.state().trigger_enabled);
            assert_eq!(controller.state().display_text, expected);
        }
    }

    #[tokio::test]
    async fn test_trigger_after_completion_starts_new_cycle() {
        let source = GatedSource::new(FetchOutcome::http_failure(503, "busy"));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut controller = PipelineController::new(source.clone(), tx);

        for _ in 0..2 {
            assert!(controller.trigger());
            source.open();
            controller.complete(rx.recv().await.unwrap());
            assert_eq!(controller.state().display_text, "Failed: HTTP 503\nbusy");
        }

        assert_eq!(source.calls(), 2);
    }
}

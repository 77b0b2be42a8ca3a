//! Test doubles shared by the panel's unit tests

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use issuedeck_client::IssueSource;
use issuedeck_core::FetchOutcome;
use tokio::sync::Notify;

/// Issue source that holds every fetch until the gate is opened
pub(crate) struct GatedSource {
    outcome: FetchOutcome,
    gate: Notify,
    calls: AtomicUsize,
}

impl GatedSource {
    pub(crate) fn new(outcome: FetchOutcome) -> Arc<Self> {
        Arc::new(Self {
            outcome,
            gate: Notify::new(),
            calls: AtomicUsize::new(0),
        })
    }

    /// Lets one pending (or the next) fetch complete
    pub(crate) fn open(&self) {
        self.gate.notify_one();
    }

    /// Number of fetches started so far
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl IssueSource for GatedSource {
    async fn fetch(&self) -> FetchOutcome {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        self.outcome.clone()
    }

    fn location(&self) -> &str {
        "fake://issues"
    }
}

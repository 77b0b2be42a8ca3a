//! Issue source abstraction
//!
//! The panel only needs "something that produces a fetch outcome". The HTTP
//! client is the production implementation; tests plug in their own.

use async_trait::async_trait;
use issuedeck_core::FetchOutcome;

use crate::IssueClient;

/// A source of issue lists
///
/// Implementations must always settle into exactly one outcome and never
/// retry on their own.
#[async_trait]
pub trait IssueSource: Send + Sync {
    /// Performs one fetch attempt
    async fn fetch(&self) -> FetchOutcome;

    /// Human-readable location of the source, used in logs
    fn location(&self) -> &str;
}

#[async_trait]
impl IssueSource for IssueClient {
    async fn fetch(&self) -> FetchOutcome {
        IssueClient::fetch(self).await
    }

    fn location(&self) -> &str {
        self.url()
    }
}

//! Issuedeck HTTP Client
//!
//! Issues the single GET request behind the panel's fetch button and turns
//! whatever happens into a [`FetchOutcome`].
//!
//! # Example
//!
//! ```no_run
//! use issuedeck_client::IssueClient;
//!
//! #[tokio::main]
//! async fn main() -> reqwest::Result<()> {
//!     let client = IssueClient::new("http://localhost:8080/api/issues")?;
//!     let outcome = client.fetch().await;
//!     print!("{}", outcome.render());
//!     Ok(())
//! }
//! ```

mod issues;
mod source;

pub use issuedeck_core::{FetchOutcome, IssueRecord};
pub use issues::classify_response;
pub use source::IssueSource;

use reqwest::{Client, redirect};

/// Default location of the issue list served by the mock API
pub const DEFAULT_ISSUES_URL: &str = "http://localhost:8080/api/issues";

/// HTTP client for the issue list endpoint
#[derive(Debug, Clone)]
pub struct IssueClient {
    /// Full URL of the issue list (e.g., "http://localhost:8080/api/issues")
    url: String,
    /// HTTP client instance
    client: Client,
}

impl IssueClient {
    /// Create a new issue client
    ///
    /// Redirects are not followed, so a 3xx answer is reported as an HTTP
    /// failure with its own status and body.
    ///
    /// # Arguments
    /// * `url` - The full URL of the issue list endpoint
    ///
    /// # Errors
    /// Fails if the underlying HTTP client cannot be initialized.
    ///
    /// # Example
    /// ```
    /// use issuedeck_client::IssueClient;
    ///
    /// let client = IssueClient::new("http://localhost:8080/api/issues").unwrap();
    /// ```
    pub fn new(url: impl Into<String>) -> reqwest::Result<Self> {
        let client = Client::builder()
            .redirect(redirect::Policy::none())
            .build()?;

        Ok(Self::with_client(url, client))
    }

    /// Create a new issue client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    /// The supplied client's redirect policy is used as is; reqwest follows
    /// redirects by default, in which case a 3xx is never seen as an HTTP
    /// failure.
    ///
    /// # Example
    /// ```
    /// use issuedeck_client::IssueClient;
    /// use reqwest::{Client, redirect};
    /// use std::time::Duration;
    ///
    /// let http_client = Client::builder()
    ///     .timeout(Duration::from_secs(30))
    ///     .redirect(redirect::Policy::none())
    ///     .build()
    ///     .unwrap();
    ///
    /// let client = IssueClient::with_client("http://localhost:8080/api/issues", http_client);
    /// ```
    pub fn with_client(url: impl Into<String>, client: Client) -> Self {
        let url = url.into();
        Self {
            url: url.trim_end_matches('/').to_string(),
            client,
        }
    }

    /// Get the URL this client fetches from
    pub fn url(&self) -> &str {
        &self.url
    }
}

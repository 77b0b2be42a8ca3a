//! Issue list endpoint

use std::error::Error as StdError;

use issuedeck_core::{FetchOutcome, decode_issues};
use tracing::{error, info};

use crate::IssueClient;

/// Longest body excerpt written to a log event
const LOG_SNIPPET_CHARS: usize = 512;

impl IssueClient {
    /// Fetch the issue list
    ///
    /// Sends a single GET with no query, headers or body and classifies the
    /// result. Never retries and never panics; every failure is folded into
    /// the returned outcome.
    pub async fn fetch(&self) -> FetchOutcome {
        info!("Starting issue fetch from: {}", self.url);

        let response = match self.client.get(&self.url).send().await {
            Ok(response) => response,
            Err(e) => return transport_failure(&self.url, &e),
        };

        let status = response.status().as_u16();
        let body = match response.bytes().await {
            Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
            Err(e) => return transport_failure(&self.url, &e),
        };

        classify_response(&self.url, status, body)
    }
}

/// Classify a received response into an outcome
///
/// Anything but 200 is an HTTP failure carrying the body verbatim. A 200 body
/// must decode completely or the whole response is a parse failure.
pub fn classify_response(url: &str, status: u16, body: String) -> FetchOutcome {
    info!(
        status,
        "HTTP response received: status={}, body={}",
        status,
        snippet(&body)
    );

    if status != 200 {
        error!(
            "HTTP request failed - status: {}, url: {}, body snippet: {}",
            status,
            url,
            snippet(&body)
        );
        return FetchOutcome::http_failure(status, body);
    }

    match decode_issues(&body) {
        Ok(records) => {
            info!("Successfully parsed {} issue(s)", records.len());
            FetchOutcome::Success(records)
        }
        Err(e) => {
            error!(
                "JSON parsing failed - status: {}, body snippet: {}, parse error: {}",
                status,
                snippet(&body),
                e
            );
            FetchOutcome::parse_failure(e.to_string(), body)
        }
    }
}

fn transport_failure(url: &str, err: &reqwest::Error) -> FetchOutcome {
    let message = error_chain(err);
    error!("Network error during request to {}: {}", url, message);
    FetchOutcome::transport_failure(message)
}

/// Joins an error with its sources, e.g. "error sending request: tcp connect error"
fn error_chain(err: &dyn StdError) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let cause_text = cause.to_string();
        if !message.contains(&cause_text) {
            message.push_str(": ");
            message.push_str(&cause_text);
        }
        source = cause.source();
    }
    message
}

fn snippet(body: &str) -> String {
    if body.is_empty() {
        return "<empty>".to_string();
    }
    match body.char_indices().nth(LOG_SNIPPET_CHARS) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

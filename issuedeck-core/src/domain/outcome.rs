//! Fetch outcome domain types
//!
//! Every fetch attempt ends in exactly one [`FetchOutcome`]. The outcome alone
//! determines what the panel displays.

use std::fmt;

use crate::domain::issue::IssueRecord;

/// Terminal result of one fetch attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The request never produced a response (connection refused, DNS, timeout)
    TransportFailure { message: String },

    /// The server answered with a status other than 200
    HttpFailure { status: u16, body: String },

    /// The body could not be decoded into issue records
    ParseFailure { message: String, raw_body: String },

    /// Issues in the order the server sent them
    Success(Vec<IssueRecord>),
}

impl FetchOutcome {
    pub fn transport_failure(message: impl Into<String>) -> Self {
        Self::TransportFailure {
            message: message.into(),
        }
    }

    pub fn http_failure(status: u16, body: impl Into<String>) -> Self {
        Self::HttpFailure {
            status,
            body: body.into(),
        }
    }

    pub fn parse_failure(message: impl Into<String>, raw_body: impl Into<String>) -> Self {
        Self::ParseFailure {
            message: message.into(),
            raw_body: raw_body.into(),
        }
    }

    /// Whether the outcome carries issues
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    /// Renders the outcome as the text shown in the display area
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for FetchOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchOutcome::TransportFailure { message } => write!(f, "Error: {}", message),
            FetchOutcome::HttpFailure { status, body } => {
                write!(f, "Failed: HTTP {}\n{}", status, body)
            }
            FetchOutcome::ParseFailure { message, .. } => {
                write!(f, "Error parsing JSON: {}", message)
            }
            FetchOutcome::Success(records) => {
                for record in records {
                    writeln!(f, "{}", record.display_line())?;
                }
                Ok(())
            }
        }
    }
}

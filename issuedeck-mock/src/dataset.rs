//! Fixed issue dataset

use issuedeck_core::IssueRecord;

/// The issues served on every request, in response order
pub fn issues() -> Vec<IssueRecord> {
    vec![
        IssueRecord::new(1, "Outdated dependency", "medium", "2025-08-20T10:15:00Z"),
        IssueRecord::new(2, "SQL injection risk", "high", "2025-08-21T08:03:00Z"),
        IssueRecord::new(3, "Weak TLS settings", "low", "2025-08-22T12:45:00Z"),
    ]
}

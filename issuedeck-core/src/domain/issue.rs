//! Issue domain types

use serde::{Deserialize, Serialize};

/// A single issue as served by the issue source
///
/// `updated_at` is kept as the exact ISO-8601 text received so it can be
/// rendered back without reformatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IssueRecord {
    pub id: i64,
    pub name: String,
    pub severity: String,
    pub updated_at: String,
}

impl IssueRecord {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        severity: impl Into<String>,
        updated_at: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            severity: severity.into(),
            updated_at: updated_at.into(),
        }
    }

    /// Formats the record as a single display line (without the newline)
    pub fn display_line(&self) -> String {
        format!(
            "[#{}] {} \u{2014} {} ({})",
            self.id, self.name, self.severity, self.updated_at
        )
    }
}

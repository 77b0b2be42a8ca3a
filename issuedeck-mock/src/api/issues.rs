//! Issue API Handlers

use axum::Json;
use issuedeck_core::IssueRecord;

use crate::dataset;

/// GET /api/issues
/// List the fixed issue dataset
pub async fn list_issues() -> Json<Vec<IssueRecord>> {
    let issues = dataset::issues();
    tracing::debug!("Serving {} issues", issues.len());

    Json(issues)
}

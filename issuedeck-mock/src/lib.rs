//! Issuedeck Mock API
//!
//! A static issue source: serves a fixed three-issue dataset over
//! `GET /api/issues`. No persistence, no validation.

pub mod api;
pub mod dataset;

pub use api::create_router;

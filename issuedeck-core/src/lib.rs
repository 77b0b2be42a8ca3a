//! Issuedeck Core
//!
//! Core types for the issuedeck fetch-parse-render pipeline.
//!
//! This crate contains:
//! - Domain types: issue records and the outcome of a single fetch
//! - Decoding: strict extraction of issue records from a JSON body

pub mod decode;
pub mod domain;

pub use decode::{DecodeError, decode_issues};
pub use domain::issue::IssueRecord;
pub use domain::outcome::FetchOutcome;

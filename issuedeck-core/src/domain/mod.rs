//! Core domain types
//!
//! These types are shared between the mock issue source (which serves them)
//! and the panel (which fetches and renders them).

pub mod issue;
pub mod outcome;

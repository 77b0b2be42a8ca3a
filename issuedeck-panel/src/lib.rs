//! Issuedeck Panel
//!
//! The fetch-parse-render pipeline behind the "Fetch Data" button.
//!
//! Architecture:
//! - Controller: the Idle/Fetching state machine that owns the panel state
//! - Presentation: the single task allowed to mutate that state; fetches run
//!   on worker tasks and hand their outcome back over a channel
//! - View and input: terminal rendering of the state and key presses turned
//!   into trigger events

pub mod config;
pub mod controller;
pub mod input;
pub mod presentation;
pub mod view;

#[cfg(test)]
mod test_support;

pub use config::Config;
pub use controller::{LOADING_TEXT, Phase, PipelineController, PipelineState};
pub use presentation::{PanelEvent, Presentation};

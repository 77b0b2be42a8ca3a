//! Terminal view
//!
//! Draws the fetch button and the display area. The view never interprets the
//! display text, it only prints it.

use colored::*;
use tokio::sync::watch;

use crate::controller::PipelineState;

const BUTTON_LABEL: &str = "[ Fetch Data ]";

/// Renders one frame of the panel
pub fn render_panel(state: &PipelineState) -> String {
    let button = if state.trigger_enabled {
        format!("{} {}", BUTTON_LABEL.green().bold(), "press Enter".dimmed())
    } else {
        format!("{} {}", BUTTON_LABEL.dimmed(), "busy".yellow())
    };

    let mut frame = format!("{}\n{}\n", button, "─".repeat(48).dimmed());
    frame.push_str(&state.display_text);
    if !state.display_text.ends_with('\n') {
        frame.push('\n');
    }
    frame
}

/// Prints every published state until the panel closes
pub async fn run_view(mut states: watch::Receiver<PipelineState>) {
    let initial = states.borrow_and_update().clone();
    print!("{}", render_panel(&initial));

    while states.changed().await.is_ok() {
        let state = states.borrow_and_update().clone();
        println!();
        print!("{}", render_panel(&state));
    }
}

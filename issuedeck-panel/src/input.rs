//! Keyboard input
//!
//! Every line read is a press of the fetch button, except `q`/`quit`, which
//! closes the panel. End of input also closes it.

use std::io::BufRead;
use std::thread;

use tokio::sync::mpsc;
use tracing::debug;

use crate::presentation::PanelEvent;

/// Maps one line of input to a panel event
pub fn parse_line(line: &str) -> PanelEvent {
    match line.trim() {
        "q" | "quit" => PanelEvent::Shutdown,
        _ => PanelEvent::Trigger,
    }
}

/// Forwards events read from `reader` until shutdown, end of input, or the
/// panel going away. Blocks the calling thread.
pub fn forward_lines<R: BufRead>(reader: R, events: &mpsc::Sender<PanelEvent>) {
    for line in reader.lines() {
        let Ok(line) = line else {
            break;
        };

        let event = parse_line(&line);
        if events.blocking_send(event).is_err() {
            debug!("Panel closed, stopping input");
            return;
        }
        if event == PanelEvent::Shutdown {
            return;
        }
    }

    debug!("Input closed");
    if events.blocking_send(PanelEvent::Shutdown).is_err() {
        debug!("Panel already closed at end of input");
    }
}

/// Reads stdin on a dedicated thread
pub fn spawn_stdin_reader(events: mpsc::Sender<PanelEvent>) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let stdin = std::io::stdin();
        forward_lines(stdin.lock(), &events);
    })
}

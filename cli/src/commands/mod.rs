//! CLI Commands

pub mod tenants;

use crate::output::print_notice;
use hotelier_console::ConsoleEvent;
use tokio::sync::broadcast;

/// Print every pending controller notice and return the last failure
/// message, if any — the shell's version of the web console's toasts.
pub fn flush_notices(rx: &mut broadcast::Receiver<ConsoleEvent>) -> Option<String> {
    let mut failure = None;
    while let Ok(event) = rx.try_recv() {
        print_notice(&event);
        if let ConsoleEvent::Failure(msg) = &event {
            failure = Some(msg.clone());
        }
    }
    failure
}

//! Console notification sink.

use crate::ports::{Notifier, Severity};

/// Notifier printing to the terminal: info to stdout, errors to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => println!("{message}"),
            Severity::Error => eprintln!("Error: {message}"),
        }
    }
}

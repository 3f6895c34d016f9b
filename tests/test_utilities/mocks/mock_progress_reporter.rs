use cluster_audit::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ProgressReporter for testing
///
/// Captures everything the use cases narrate so tests can assert on the
/// log-and-continue behavior after the reporter has been moved in.
pub struct MockProgressReporter {
    messages: Arc<Mutex<Vec<String>>>,
    errors: Arc<Mutex<Vec<String>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self {
            messages: Arc::new(Mutex::new(Vec::new())),
            errors: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn messages_handle(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.messages)
    }

    pub fn errors_handle(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.errors)
    }
}

impl Default for MockProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn report_progress(&self, current: usize, total: usize, message: Option<&str>) {
        self.messages.lock().unwrap().push(format!(
            "{}/{} {}",
            current,
            total,
            message.unwrap_or_default()
        ));
    }

    fn report_error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}

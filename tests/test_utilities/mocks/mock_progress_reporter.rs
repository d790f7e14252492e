use pom_validator::prelude::*;
use std::sync::{Arc, Mutex};

/// Event captured by [`MockProgressReporter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Info(String),
    Progress { current: usize, total: usize },
    Error(String),
    Completed(String),
}

/// Mock ProgressReporter recording every call in order
///
/// Clones share the same event log, so a clone can be handed to the use case
/// and inspected afterwards.
#[derive(Default, Clone)]
pub struct MockProgressReporter {
    events: Arc<Mutex<Vec<ProgressEvent>>>,
}

impl MockProgressReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ProgressEvent> {
        self.events.lock().unwrap().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                ProgressEvent::Error(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    fn record(&self, event: ProgressEvent) {
        self.events.lock().unwrap().push(event);
    }
}

impl ProgressReporter for MockProgressReporter {
    fn report(&self, message: &str) {
        self.record(ProgressEvent::Info(message.to_string()));
    }

    fn report_progress(&self, current: usize, total: usize, _message: Option<&str>) {
        self.record(ProgressEvent::Progress { current, total });
    }

    fn report_error(&self, message: &str) {
        self.record(ProgressEvent::Error(message.to_string()));
    }

    fn report_completion(&self, message: &str) {
        self.record(ProgressEvent::Completed(message.to_string()));
    }
}

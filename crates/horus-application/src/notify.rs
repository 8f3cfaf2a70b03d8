//! User-visible status notifications.
//!
//! Services report non-blocking, display-only status messages ("Persona
//! saved", "Settings imported") through this seam. The UI shell decides how
//! to render them; the default sink just logs.

/// Sink for display-only status messages.
pub trait StatusNotifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Default notifier that forwards messages to the tracing log.
pub struct TracingNotifier;

impl StatusNotifier for TracingNotifier {
    fn notify(&self, message: &str) {
        tracing::info!(target: "horus::status", "{message}");
    }
}

/// Test double collecting every message in order.
#[cfg(test)]
pub(crate) struct RecordingNotifier {
    messages: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl RecordingNotifier {
    pub(crate) fn new() -> Self {
        Self {
            messages: std::sync::Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }
}

#[cfg(test)]
impl StatusNotifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }
}

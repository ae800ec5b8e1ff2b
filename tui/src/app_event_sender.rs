use std::sync::mpsc::Sender;

use crate::app_event::AppEvent;

/// Clonable handle for pushing events into the main loop.
#[derive(Clone, Debug)]
pub(crate) struct AppEventSender {
    tx: Sender<AppEvent>,
}

impl AppEventSender {
    pub(crate) fn new(tx: Sender<AppEvent>) -> Self {
        Self { tx }
    }

    /// Send an event to the app event channel. If it fails, we swallow
    /// the error and log it; sends only fail during shutdown.
    pub(crate) fn send(&self, event: AppEvent) {
        if let Err(err) = self.tx.send(event) {
            tracing::error!("failed to send event: {err}");
        }
    }
}

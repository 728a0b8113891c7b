use tokio::sync::mpsc;
use tokio_util::task::TaskTracker;
use tracing::{info, info_span, warn, Instrument};

use crate::dispatcher::request_path::request_path;
use crate::dispatcher::types::{Completion, Outcome, RequestToken};
use crate::kernel::event::Event;
use crate::services::emotion::client::EmotionService;

/// Fires requests without waiting on them. Each spawned request reports back
/// through the event channel exactly once.
pub struct AsyncDispatcher {
    service: EmotionService,
    tx: mpsc::Sender<Event>,
    tracker: TaskTracker,
}

impl AsyncDispatcher {
    pub fn new(service: EmotionService, tx: mpsc::Sender<Event>) -> Self {
        Self {
            service,
            tx,
            tracker: TaskTracker::new(),
        }
    }

    /// Returns as soon as the request task is spawned.
    pub fn dispatch(&self, token: RequestToken, text: &str) {
        let service = self.service.clone();
        let tx = self.tx.clone();
        let path = request_path(text);
        let span = info_span!("request", seq = token.seq, id = %token.correlation);

        self.tracker.spawn(
            async move {
                let outcome = match service.fetch(&path).await {
                    Ok(response) => {
                        info!(status = response.status, "Response received");
                        Outcome::from_response(response.status, response.body)
                    }
                    Err(e) => {
                        warn!("Request failed: {}", e);
                        Outcome::TransportError(e.to_string())
                    }
                };

                // Receiver gone means the page is gone; nothing left to update.
                let _ = tx.send(Event::Completed(Completion { token, outcome })).await;
            }
            .instrument(span),
        );
    }

    /// Waits until every request task spawned so far has finished. The tracker
    /// is reopened afterwards, so the dispatcher stays usable.
    pub async fn wait_idle(&self) {
        self.tracker.close();
        self.tracker.wait().await;
        self.tracker.reopen();
    }
}

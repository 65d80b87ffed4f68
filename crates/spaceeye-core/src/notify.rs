// ── Notification sinks ──
//
// The controller only asks for a toast; sinks decide how and for how long
// it is shown.

use tokio::sync::broadcast;
use tracing::debug;

use crate::model::NotificationEvent;

const NOTIFICATION_CHANNEL_SIZE: usize = 64;

/// Receives toast requests.
pub trait NotificationSink: Send + Sync {
    fn notify(&self, event: NotificationEvent);
}

/// Fans toasts out to any number of presentation-layer subscribers.
pub struct BroadcastNotifier {
    tx: broadcast::Sender<NotificationEvent>,
}

impl BroadcastNotifier {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(NOTIFICATION_CHANNEL_SIZE);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<NotificationEvent> {
        self.tx.subscribe()
    }
}

impl Default for BroadcastNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationSink for BroadcastNotifier {
    fn notify(&self, event: NotificationEvent) {
        if self.tx.send(event).is_err() {
            debug!("toast dropped: no subscribers");
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::model::Severity;

    #[tokio::test]
    async fn subscribers_receive_events_in_order() {
        let notifier = BroadcastNotifier::new();
        let mut rx = notifier.subscribe();

        notifier.notify(NotificationEvent::new("first", Severity::Success, Duration::from_secs(3)));
        notifier.notify(NotificationEvent::new("second", Severity::Error, Duration::from_secs(3)));

        assert_eq!(rx.recv().await.unwrap().message, "first");
        let second = rx.recv().await.unwrap();
        assert_eq!(second.message, "second");
        assert_eq!(second.severity, Severity::Error);
    }

    #[test]
    fn notifying_without_subscribers_is_harmless() {
        let notifier = BroadcastNotifier::new();
        notifier.notify(NotificationEvent::new("lost", Severity::Success, Duration::from_secs(3)));
    }
}

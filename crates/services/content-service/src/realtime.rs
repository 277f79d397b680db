//! In-process change feed.
//!
//! Every committed write publishes a [`ChangeEvent`]. Subscribers get a stream
//! of events, optionally narrowed to one table, and re-fetch on receipt.

use futures::stream::{self, Stream};
use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{trace, warn};

use domain::ChangeEvent;

/// Fan-out channel for row change notifications
#[derive(Debug, Clone)]
pub struct ChangeFeed {
    sender: broadcast::Sender<ChangeEvent>,
}

impl ChangeFeed {
    /// `capacity` is how many events a slow subscriber may fall behind by
    /// before it starts skipping.
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity.max(1));
        Self { sender }
    }

    /// Publish an event. Having no subscribers is not an error.
    pub fn publish(&self, event: ChangeEvent) {
        match self.sender.send(event) {
            Ok(count) => trace!(count, "Change event dispatched"),
            Err(broadcast::error::SendError(event)) => {
                trace!(table = %event.table, "Change event dropped: no active subscribers")
            }
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ChangeEvent> {
        self.sender.subscribe()
    }

    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }

    /// Stream events for `table`, or for every table when `None`.
    ///
    /// A lagging subscriber skips the missed events and continues from the
    /// oldest retained one.
    pub fn watch(&self, table: Option<String>) -> impl Stream<Item = ChangeEvent> + Send + 'static {
        let receiver = self.sender.subscribe();

        stream::unfold((receiver, table), |(mut receiver, table)| async move {
            loop {
                match receiver.recv().await {
                    Ok(event) => {
                        if table.as_deref().map_or(true, |t| t == event.table) {
                            return Some((event, (receiver, table)));
                        }
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(skipped, table = ?table, "Change feed subscriber lagged");
                    }
                    Err(RecvError::Closed) => return None,
                }
            }
        })
    }
}

impl Default for ChangeFeed {
    fn default() -> Self {
        Self::new(128)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;
    use uuid::Uuid;

    #[tokio::test]
    async fn test_publish_without_subscribers() {
        let feed = ChangeFeed::new(4);
        feed.publish(ChangeEvent::inserted("journeys", Uuid::new_v4()));
        assert_eq!(feed.subscriber_count(), 0);
    }

    #[tokio::test]
    async fn test_watch_filters_by_table() {
        let feed = ChangeFeed::new(8);
        let stream = feed.watch(Some("destinations".to_string()));
        tokio::pin!(stream);

        let id = Uuid::new_v4();
        feed.publish(ChangeEvent::inserted("journeys", Uuid::new_v4()));
        feed.publish(ChangeEvent::updated("destinations", id));

        let event = stream.next().await.unwrap();
        assert_eq!(event.table, "destinations");
        assert_eq!(event.id, id);
    }

    #[tokio::test]
    async fn test_watch_all_tables() {
        let feed = ChangeFeed::new(8);
        let stream = feed.watch(None);
        tokio::pin!(stream);

        feed.publish(ChangeEvent::deleted("categories", Uuid::new_v4()));

        let event = stream.next().await.unwrap();
        assert_eq!(event.table, "categories");
        assert_eq!(event.kind, domain::ChangeKind::Delete);
    }

    #[tokio::test]
    async fn test_lagging_subscriber_skips_ahead() {
        let feed = ChangeFeed::new(2);
        let stream = feed.watch(None);
        tokio::pin!(stream);

        let ids: Vec<Uuid> = (0..4).map(|_| Uuid::new_v4()).collect();
        for id in &ids {
            feed.publish(ChangeEvent::inserted("packages", *id));
        }

        // Only the two newest events are retained
        assert_eq!(stream.next().await.unwrap().id, ids[2]);
        assert_eq!(stream.next().await.unwrap().id, ids[3]);
    }
}

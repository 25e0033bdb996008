use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::mpsc;

use catalog_types::RelayError;

use super::broker::{Broker, Delivery, Subscription};

struct QueueState {
    durable: bool,
    tx: Option<mpsc::UnboundedSender<Delivery>>,
    rx: Option<mpsc::UnboundedReceiver<Delivery>>,
}

/// In-process broker. Queues buffer published payloads until a single
/// subscriber drains them in publish order; cancelling a queue or closing
/// the broker ends the corresponding delivery streams.
pub struct MemoryBroker {
    queues: Mutex<HashMap<String, QueueState>>,
    closed: AtomicBool,
}

impl MemoryBroker {
    pub fn new() -> Self {
        Self {
            queues: Mutex::new(HashMap::new()),
            closed: AtomicBool::new(false),
        }
    }

    /// Tear down the connection: every queue channel is released and all
    /// subscriptions end once their buffered deliveries are drained.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        self.queues.lock().unwrap().clear();
    }

    fn ensure_open(&self) -> Result<(), RelayError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(RelayError::Connection("broker connection closed".into()));
        }
        Ok(())
    }
}

impl Default for MemoryBroker {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Broker for MemoryBroker {
    async fn declare_queue(&self, name: &str, durable: bool) -> Result<(), RelayError> {
        self.ensure_open()?;
        let mut queues = self.queues.lock().unwrap();

        if let Some(queue) = queues.get(name) {
            if queue.durable != durable {
                return Err(RelayError::QueueConflict {
                    queue: name.to_string(),
                });
            }
            return Ok(());
        }

        let (tx, rx) = mpsc::unbounded_channel();
        queues.insert(
            name.to_string(),
            QueueState {
                durable,
                tx: Some(tx),
                rx: Some(rx),
            },
        );
        Ok(())
    }

    async fn publish(&self, queue: &str, payload: Delivery) -> Result<(), RelayError> {
        self.ensure_open()?;
        let queues = self.queues.lock().unwrap();

        let state = queues
            .get(queue)
            .ok_or_else(|| RelayError::Publish(format!("queue '{queue}' not declared")))?;
        let tx = state
            .tx
            .as_ref()
            .ok_or_else(|| RelayError::Publish(format!("channel for '{queue}' released")))?;

        tx.send(payload)
            .map_err(|_| RelayError::Publish(format!("channel for '{queue}' released")))
    }

    async fn subscribe(&self, queue: &str) -> Result<Subscription, RelayError> {
        self.ensure_open()?;
        let mut queues = self.queues.lock().unwrap();

        let state = queues
            .get_mut(queue)
            .ok_or_else(|| RelayError::Connection(format!("queue '{queue}' not declared")))?;
        let rx = state.rx.take().ok_or(RelayError::AlreadySubscribed {
            queue: queue.to_string(),
        })?;

        Ok(Subscription::new(rx))
    }

    async fn cancel(&self, queue: &str) -> Result<(), RelayError> {
        let mut queues = self.queues.lock().unwrap();
        if let Some(state) = queues.get_mut(queue) {
            state.tx = None;
        }
        Ok(())
    }

    async fn close(&self) {
        MemoryBroker::close(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn redeclare_with_matching_attributes_is_a_noop() {
        let broker = MemoryBroker::new();
        broker.declare_queue("product", true).await.unwrap();
        broker.declare_queue("product", true).await.unwrap();
    }

    #[tokio::test]
    async fn redeclare_with_mismatched_durability_fails() {
        let broker = MemoryBroker::new();
        broker.declare_queue("product", true).await.unwrap();

        let err = broker.declare_queue("product", false).await.unwrap_err();
        assert!(matches!(err, RelayError::QueueConflict { queue } if queue == "product"));
    }

    #[tokio::test]
    async fn deliveries_arrive_in_publish_order() {
        let broker = MemoryBroker::new();
        broker.declare_queue("product", true).await.unwrap();

        broker.publish("product", b"a".to_vec()).await.unwrap();
        broker.publish("product", b"b".to_vec()).await.unwrap();

        let mut sub = broker.subscribe("product").await.unwrap();
        assert_eq!(sub.next().await.unwrap(), b"a");
        assert_eq!(sub.next().await.unwrap(), b"b");
    }

    #[tokio::test]
    async fn a_queue_has_at_most_one_subscriber() {
        let broker = MemoryBroker::new();
        broker.declare_queue("product", true).await.unwrap();
        let _sub = broker.subscribe("product").await.unwrap();

        let err = broker.subscribe("product").await.unwrap_err();
        assert!(matches!(err, RelayError::AlreadySubscribed { .. }));
    }

    #[tokio::test]
    async fn cancel_drains_buffer_then_ends_the_stream() {
        let broker = MemoryBroker::new();
        broker.declare_queue("product", true).await.unwrap();
        broker.publish("product", b"a".to_vec()).await.unwrap();

        let mut sub = broker.subscribe("product").await.unwrap();
        broker.cancel("product").await.unwrap();

        assert_eq!(sub.next().await.unwrap(), b"a");
        assert!(sub.next().await.is_none());
    }

    #[tokio::test]
    async fn close_ends_every_stream_and_rejects_new_work() {
        let broker = MemoryBroker::new();
        broker.declare_queue("product", true).await.unwrap();
        let mut sub = broker.subscribe("product").await.unwrap();

        broker.close();

        assert!(sub.next().await.is_none());
        let err = broker.publish("product", b"a".to_vec()).await.unwrap_err();
        assert!(matches!(err, RelayError::Connection(_)));
    }
}

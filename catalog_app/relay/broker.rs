use async_trait::async_trait;
use tokio::sync::mpsc;

use catalog_types::RelayError;

/// A raw message payload taken from a queue.
pub type Delivery = Vec<u8>;

/// The message-queue capability consumed by the relay. The broker owns
/// queue durability and redelivery; the relay only declares, publishes
/// and subscribes.
#[async_trait]
pub trait Broker: Send + Sync {
    /// Declare a queue. Idempotent: re-declaring an existing queue with
    /// matching attributes is a no-op; a durability mismatch is a fatal
    /// configuration error.
    async fn declare_queue(&self, name: &str, durable: bool) -> Result<(), RelayError>;

    /// Publish a payload onto a declared queue.
    async fn publish(&self, queue: &str, payload: Delivery) -> Result<(), RelayError>;

    /// Subscribe to a declared queue. At most one subscriber per queue;
    /// deliveries arrive strictly in publish order. The stream ends when
    /// the subscription is cancelled or the connection is torn down.
    async fn subscribe(&self, queue: &str) -> Result<Subscription, RelayError>;

    /// Cancel the subscription channel for a queue, ending its delivery
    /// stream. A no-op for queues that were never subscribed.
    async fn cancel(&self, queue: &str) -> Result<(), RelayError>;

    /// Tear down the underlying connection. Every delivery stream ends
    /// once its buffered deliveries are drained; later operations fail.
    async fn close(&self);
}

/// A sequential delivery stream for a single queue.
#[derive(Debug)]
pub struct Subscription {
    rx: mpsc::UnboundedReceiver<Delivery>,
}

impl Subscription {
    pub fn new(rx: mpsc::UnboundedReceiver<Delivery>) -> Self {
        Self { rx }
    }

    /// Wait for the next delivery. `None` means the subscription channel
    /// was released and the stream is over.
    pub async fn next(&mut self) -> Option<Delivery> {
        self.rx.recv().await
    }
}

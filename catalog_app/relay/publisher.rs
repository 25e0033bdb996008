use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use catalog_types::RelayError;

use super::broker::Broker;
use super::codec::{self, RelayResult};

/// Owns the outbound queue. Delivery is best-effort: a transport failure
/// is logged and propagated, never retried. Clones share the closed flag.
#[derive(Clone)]
pub struct ResultPublisher {
    broker: Arc<dyn Broker>,
    queue: String,
    closed: Arc<AtomicBool>,
}

impl ResultPublisher {
    /// Declares the durable outbound queue and binds the publisher to it.
    pub async fn new(
        broker: Arc<dyn Broker>,
        queue: impl Into<String>,
    ) -> Result<Self, RelayError> {
        let queue = queue.into();
        broker.declare_queue(&queue, true).await?;

        Ok(Self {
            broker,
            queue,
            closed: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Encode and send one result.
    pub async fn send(&self, result: &RelayResult) -> Result<(), RelayError> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(RelayError::Publish("publisher closed".into()));
        }

        let body = codec::encode(result)?;
        match self.broker.publish(&self.queue, body).await {
            Ok(()) => {
                tracing::debug!(queue = %self.queue, message = result.message(), "result published");
                Ok(())
            }
            Err(e) => {
                tracing::error!(queue = %self.queue, "failed to publish result: {e}");
                Err(e)
            }
        }
    }

    /// Release the outbound channel. Idempotent.
    pub fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
    }
}

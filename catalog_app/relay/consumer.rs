use std::sync::Arc;

use tokio::sync::{Mutex, watch};

use catalog_types::RelayError;

use super::broker::{Broker, Delivery};
use super::codec;
use super::dispatcher::Dispatcher;
use super::publisher::ResultPublisher;

/// Consumer lifecycle. Construction covers the created-to-subscribed
/// transition: `new` only returns once the inbound queue is declared.
#[derive(Debug, Clone, Copy, PartialEq)]
enum ConsumerState {
    Subscribed,
    Running,
    Closed,
}

/// The inbound side of the relay: one long-lived subscription drained by
/// a single background task. Messages are acknowledged on receipt and
/// processed strictly sequentially (decode, route, publish), so command
/// ordering is preserved and nothing inside the relay needs a lock per
/// record. A decode or handler failure skips that message only.
pub struct CommandConsumer {
    broker: Arc<dyn Broker>,
    queue: String,
    publisher: Option<ResultPublisher>,
    dispatcher: Dispatcher,
    state: Mutex<ConsumerState>,
    stopped_tx: watch::Sender<bool>,
}

impl CommandConsumer {
    /// Declare the inbound queue and, when a result queue is configured,
    /// build the publisher. Setup failures are fatal and propagate to the
    /// caller; a publisher failure releases the already-bound inbound
    /// channel before returning.
    pub async fn new(
        broker: Arc<dyn Broker>,
        dispatcher: Dispatcher,
        command_queue: impl Into<String>,
        result_queue: Option<String>,
    ) -> Result<Self, RelayError> {
        let queue = command_queue.into();
        broker.declare_queue(&queue, true).await?;

        let publisher = match result_queue {
            Some(result_queue) => {
                match ResultPublisher::new(broker.clone(), result_queue).await {
                    Ok(publisher) => Some(publisher),
                    Err(e) => {
                        // Partial initialization: release the inbound side.
                        let _ = broker.cancel(&queue).await;
                        return Err(e);
                    }
                }
            }
            None => None,
        };

        let (stopped_tx, _) = watch::channel(false);

        Ok(Self {
            broker,
            queue,
            publisher,
            dispatcher,
            state: Mutex::new(ConsumerState::Subscribed),
            stopped_tx,
        })
    }

    /// Start draining the inbound queue on a background task. Returns as
    /// soon as the receive loop is spawned; it never blocks the caller.
    /// Idempotent: a second call on a running consumer is a no-op.
    pub async fn start(&self) -> Result<(), RelayError> {
        let mut state = self.state.lock().await;
        match *state {
            ConsumerState::Running => return Ok(()),
            ConsumerState::Closed => {
                return Err(RelayError::Connection("consumer already closed".into()));
            }
            ConsumerState::Subscribed => {}
        }

        let mut subscription = self.broker.subscribe(&self.queue).await?;
        *state = ConsumerState::Running;
        drop(state);

        let queue = self.queue.clone();
        let dispatcher = self.dispatcher.clone();
        let publisher = self.publisher.clone();
        let stopped_tx = self.stopped_tx.clone();
        tokio::spawn(async move {
            while let Some(delivery) = subscription.next().await {
                process(&dispatcher, publisher.as_ref(), &queue, delivery).await;
            }
            // The delivery stream only ends on connection teardown.
            stopped_tx.send_replace(true);
            tracing::info!(queue = %queue, "command consumer stopped");
        });

        tracing::info!(queue = %self.queue, "listening for commands");
        Ok(())
    }

    /// Release the subscription and, if attached, the publisher.
    /// Idempotent, and safe to call even when `start` never ran.
    ///
    /// Cancelling the subscription ends the delivery stream, but the
    /// receive loop keeps draining already-buffered messages first. The
    /// stopped signal stays with the loop-exit path for that reason;
    /// close only flips it when no loop was ever spawned.
    pub async fn close(&self) {
        let mut state = self.state.lock().await;
        if *state == ConsumerState::Closed {
            return;
        }
        let was_running = *state == ConsumerState::Running;
        *state = ConsumerState::Closed;
        drop(state);

        if let Err(e) = self.broker.cancel(&self.queue).await {
            tracing::warn!(queue = %self.queue, "error releasing subscription: {e}");
        }
        if let Some(publisher) = &self.publisher {
            publisher.close();
        }
        if !was_running {
            self.stopped_tx.send_replace(true);
        }
    }

    /// Observable stop signal: flips to `true` once the receive loop has
    /// exited (or the consumer was closed before ever running).
    pub fn stopped(&self) -> watch::Receiver<bool> {
        self.stopped_tx.subscribe()
    }
}

async fn process(
    dispatcher: &Dispatcher,
    publisher: Option<&ResultPublisher>,
    queue: &str,
    delivery: Delivery,
) {
    let command = match codec::decode(&delivery) {
        Ok(command) => command,
        Err(e) => {
            tracing::warn!(queue = %queue, "failed to decode message: {e}");
            return;
        }
    };

    let result = dispatcher.route(command).await;

    match publisher {
        Some(publisher) => {
            // A publish failure is logged inside send; the inbound message
            // still counts as handled.
            let _ = publisher.send(&result).await;
        }
        None => {
            tracing::info!(
                success = result.is_success(),
                message = result.message(),
                "result not published: no result queue configured"
            );
        }
    }
}

use std::collections::HashMap;

use async_trait::async_trait;
use futures_util::StreamExt;
use lapin::{
    BasicProperties, Channel, Connection, ConnectionProperties,
    options::{
        BasicAckOptions, BasicCancelOptions, BasicConsumeOptions, BasicPublishOptions,
        QueueDeclareOptions,
    },
    types::FieldTable,
};
use tokio::sync::{Mutex, mpsc};

use catalog_types::RelayError;

use super::broker::{Broker, Delivery, Subscription};

/// AMQP-backed broker. One connection, one channel; consumer tags are
/// tracked per queue so `cancel` can end the matching delivery stream.
///
/// Queues are declared on the default exchange, so the queue name doubles
/// as the routing key.
pub struct AmqpBroker {
    connection: Connection,
    channel: Channel,
    tags: Mutex<HashMap<String, String>>,
}

impl AmqpBroker {
    pub async fn connect(url: &str) -> Result<Self, RelayError> {
        let options = ConnectionProperties::default()
            .with_executor(tokio_executor_trait::Tokio::current())
            .with_reactor(tokio_reactor_trait::Tokio);

        let connection = Connection::connect(url, options)
            .await
            .map_err(|e| RelayError::Connection(e.to_string()))?;
        let channel = connection
            .create_channel()
            .await
            .map_err(|e| RelayError::Connection(e.to_string()))?;

        Ok(Self {
            connection,
            channel,
            tags: Mutex::new(HashMap::new()),
        })
    }
}

#[async_trait]
impl Broker for AmqpBroker {
    async fn declare_queue(&self, name: &str, durable: bool) -> Result<(), RelayError> {
        let options = QueueDeclareOptions {
            durable,
            ..QueueDeclareOptions::default()
        };
        self.channel
            .queue_declare(name, options, FieldTable::default())
            .await
            .map(|_| ())
            .map_err(|e| {
                // The server refuses a re-declare with different attributes.
                if e.to_string().contains("PRECONDITION") {
                    RelayError::QueueConflict {
                        queue: name.to_string(),
                    }
                } else {
                    RelayError::Connection(e.to_string())
                }
            })
    }

    async fn publish(&self, queue: &str, payload: Delivery) -> Result<(), RelayError> {
        self.channel
            .basic_publish(
                "",
                queue,
                BasicPublishOptions::default(),
                &payload,
                BasicProperties::default(),
            )
            .await
            .map_err(|e| RelayError::Publish(e.to_string()))?
            .await
            .map_err(|e| RelayError::Publish(e.to_string()))?;
        Ok(())
    }

    async fn subscribe(&self, queue: &str) -> Result<Subscription, RelayError> {
        let mut tags = self.tags.lock().await;
        if tags.contains_key(queue) {
            return Err(RelayError::AlreadySubscribed {
                queue: queue.to_string(),
            });
        }

        let mut consumer = self
            .channel
            .basic_consume(
                queue,
                "",
                BasicConsumeOptions::default(),
                FieldTable::default(),
            )
            .await
            .map_err(|e| RelayError::Connection(e.to_string()))?;
        tags.insert(queue.to_string(), consumer.tag().to_string());
        drop(tags);

        // Forward deliveries into a local channel so consumers see the
        // same `Subscription` stream regardless of transport.
        let (tx, rx) = mpsc::unbounded_channel();
        let queue_name = queue.to_string();
        tokio::spawn(async move {
            while let Some(delivery) = consumer.next().await {
                let delivery = match delivery {
                    Ok(delivery) => delivery,
                    Err(e) => {
                        tracing::warn!(queue = %queue_name, "delivery stream error: {e}");
                        break;
                    }
                };
                // Acknowledged on receipt; a processing failure downstream
                // never requeues the message.
                if let Err(e) = delivery.ack(BasicAckOptions::default()).await {
                    tracing::warn!(queue = %queue_name, "failed to ack delivery: {e}");
                }
                if tx.send(delivery.data).is_err() {
                    break;
                }
            }
        });

        Ok(Subscription::new(rx))
    }

    async fn cancel(&self, queue: &str) -> Result<(), RelayError> {
        let tag = self.tags.lock().await.remove(queue);
        if let Some(tag) = tag {
            self.channel
                .basic_cancel(&tag, BasicCancelOptions::default())
                .await
                .map_err(|e| RelayError::Connection(e.to_string()))?;
        }
        Ok(())
    }

    async fn close(&self) {
        if let Err(e) = self.connection.close(200, "shutting down").await {
            tracing::warn!("error closing broker connection: {e}");
        }
    }
}

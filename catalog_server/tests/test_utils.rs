#[cfg(test)]
pub mod tests {
    use std::sync::Arc;

    use catalog_app::{
        app_bus::{AppBus, HandlerContext},
        relay::{Broker, CommandConsumer, Dispatcher, MemoryBroker, Subscription},
        test_utils::tests::{MockProductRepository, MockUserRepository},
    };
    use catalog_types::Result;

    pub const COMMAND_QUEUE: &str = "product";
    pub const RESULT_QUEUE: &str = "products";

    pub struct RelayHarness {
        pub broker: Arc<MemoryBroker>,
        pub products: Arc<MockProductRepository>,
        pub consumer: Arc<CommandConsumer>,
    }

    impl RelayHarness {
        pub async fn publish_command(&self, json: &str) -> Result<()> {
            self.broker
                .publish(COMMAND_QUEUE, json.as_bytes().to_vec())
                .await?;
            Ok(())
        }

        pub async fn subscribe_results(&self) -> Result<Subscription> {
            Ok(self.broker.subscribe(RESULT_QUEUE).await?)
        }
    }

    /// Wire mock repositories, a memory broker and a consumer. Passing
    /// `None` for the result queue runs the relay in log-only mode.
    pub async fn setup_relay(result_queue: Option<&str>) -> Result<RelayHarness> {
        let products = Arc::new(MockProductRepository::new());
        let ctx = HandlerContext::new(products.clone(), Arc::new(MockUserRepository::new()));
        let app_bus = Arc::new(AppBus::new(ctx));

        let broker = Arc::new(MemoryBroker::new());
        let consumer = CommandConsumer::new(
            broker.clone() as Arc<dyn Broker>,
            Dispatcher::new(app_bus),
            COMMAND_QUEUE,
            result_queue.map(|q| q.to_string()),
        )
        .await?;

        Ok(RelayHarness {
            broker,
            products,
            consumer: Arc::new(consumer),
        })
    }

    pub fn app_bus_with_mocks() -> (Arc<AppBus>, Arc<MockProductRepository>) {
        let products = Arc::new(MockProductRepository::new());
        let ctx = HandlerContext::new(products.clone(), Arc::new(MockUserRepository::new()));
        (Arc::new(AppBus::new(ctx)), products)
    }
}

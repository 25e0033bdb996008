mod amqp;
mod broker;
mod codec;
mod consumer;
mod dispatcher;
mod memory;
mod publisher;

pub use amqp::AmqpBroker;
pub use broker::{Broker, Delivery, Subscription};
pub use codec::{RelayCommand, RelayResult, ResultPayload, decode, encode};
pub use consumer::CommandConsumer;
pub use dispatcher::Dispatcher;
pub use memory::MemoryBroker;
pub use publisher::ResultPublisher;

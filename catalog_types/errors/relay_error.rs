use thiserror::Error;

/// Errors for the queue relay.
///
/// `Connection` and `QueueConflict` are fatal at startup and abort relay
/// initialization. `Decode`, `UnknownVerb` and `MissingId` skip the
/// offending message and leave the consumer running. `Publish` is logged
/// only; the inbound message still counts as handled.
#[derive(Debug, Error)]
pub enum RelayError {
    #[error("Broker unreachable: {0}")]
    Connection(String),

    #[error("Queue '{queue}' already declared with different attributes")]
    QueueConflict { queue: String },

    #[error("Queue '{queue}' already has a subscriber")]
    AlreadySubscribed { queue: String },

    #[error("Malformed message: {0}")]
    Decode(String),

    #[error("Unknown verb '{0}'")]
    UnknownVerb(String),

    #[error("Verb '{0}' requires an Id")]
    MissingId(String),

    #[error("Publish failed: {0}")]
    Publish(String),
}

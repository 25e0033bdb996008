mod test_utils;

use std::time::Duration;

use catalog_app::relay::Broker;
use catalog_types::Result;
use catalog_types::common::Product;
use serde_json::Value;
use tokio::time::{sleep, timeout};

use crate::test_utils::tests::setup_relay;

/// An unrecognized verb is a decode error: no handler call, no outbound
/// message, and the consumer keeps processing subsequent messages.
#[tokio::test]
async fn unknown_verb_is_skipped_and_the_consumer_keeps_running() -> Result<()> {
    let harness = setup_relay(Some("products")).await?;
    harness.products.seed(Product::new(42, "Widget", 9.99));
    let mut results = harness.subscribe_results().await?;
    harness.consumer.start().await?;

    harness.publish_command(r#"{"Status":"archive"}"#).await?;
    harness
        .publish_command(r#"{"Id":42,"Status":"getById"}"#)
        .await?;

    // The first (and only) outbound message belongs to the second command.
    let body: Value = serde_json::from_slice(&results.next().await.unwrap())?;
    assert_eq!(body["Message"], "Producto encontrado");
    assert!(harness.products.created().is_empty());
    Ok(())
}

#[tokio::test]
async fn malformed_payloads_never_stop_the_loop() -> Result<()> {
    let harness = setup_relay(Some("products")).await?;
    let mut results = harness.subscribe_results().await?;
    harness.consumer.start().await?;

    harness.publish_command("not json at all").await?;
    harness.publish_command(r#"{"Id":"oops"}"#).await?;
    harness
        .publish_command(r#"{"Id":0,"Name":"Widget","Price":1.0,"Status":"post"}"#)
        .await?;

    let body: Value = serde_json::from_slice(&results.next().await.unwrap())?;
    assert_eq!(body["Message"], "Producto creado exitosamente");
    Ok(())
}

/// Log-only deployment mode: without a result queue the store is still
/// written, nothing is published and nothing errors.
#[tokio::test]
async fn missing_publisher_still_dispatches_commands() -> Result<()> {
    let harness = setup_relay(None).await?;
    harness.consumer.start().await?;

    harness
        .publish_command(r#"{"Id":0,"Name":"Widget","Price":9.99,"Status":"post"}"#)
        .await?;

    timeout(Duration::from_secs(1), async {
        while harness.products.created().is_empty() {
            sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("store was never called");

    assert_eq!(harness.products.created(), vec!["Widget".to_string()]);
    // No result queue was ever declared, so there is nothing to publish to.
    assert!(harness.broker.subscribe("products").await.is_err());
    Ok(())
}

/// A failed publish is logged and swallowed: the inbound message counts
/// as handled and the next one is processed normally.
#[tokio::test]
async fn publish_failure_does_not_stall_the_relay() -> Result<()> {
    let harness = setup_relay(Some("products")).await?;
    harness.products.seed(Product::new(1, "Widget", 1.0));
    harness.consumer.start().await?;

    // Release the outbound channel from under the publisher.
    harness.broker.cancel("products").await?;

    harness
        .publish_command(r#"{"Id":0,"Name":"Gadget","Price":2.0,"Status":"post"}"#)
        .await?;
    harness
        .publish_command(r#"{"Id":0,"Name":"Gizmo","Price":3.0,"Status":"post"}"#)
        .await?;

    timeout(Duration::from_secs(1), async {
        while harness.products.created().len() < 2 {
            sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("both commands should be handled despite publish failures");
    Ok(())
}

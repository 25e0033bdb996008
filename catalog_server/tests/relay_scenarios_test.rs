mod test_utils;

use catalog_app::repository::ProductRepository;
use catalog_types::Result;
use catalog_types::common::Product;
use serde_json::Value;

use crate::test_utils::tests::setup_relay;

#[tokio::test]
async fn create_command_stores_and_publishes_success() -> Result<()> {
    let harness = setup_relay(Some("products")).await?;
    let mut results = harness.subscribe_results().await?;
    harness.consumer.start().await?;

    harness
        .publish_command(r#"{"Id":0,"Name":"Widget","Price":9.99,"Status":"post"}"#)
        .await?;

    let body: Value = serde_json::from_slice(&results.next().await.unwrap())?;
    assert_eq!(body["Status"], "success");
    assert_eq!(body["Message"], "Producto creado exitosamente");
    assert!(body.get("Product").is_none());

    assert_eq!(harness.products.created(), vec!["Widget".to_string()]);
    Ok(())
}

#[tokio::test]
async fn get_by_id_publishes_the_found_record() -> Result<()> {
    let harness = setup_relay(Some("products")).await?;
    harness.products.seed(Product::new(42, "Widget", 9.99));
    let mut results = harness.subscribe_results().await?;
    harness.consumer.start().await?;

    harness
        .publish_command(r#"{"Id":42,"Status":"getById"}"#)
        .await?;

    let body: Value = serde_json::from_slice(&results.next().await.unwrap())?;
    assert_eq!(body["Status"], "success");
    assert_eq!(body["Message"], "Producto encontrado");
    assert_eq!(body["Product"]["id"], 42);
    assert_eq!(body["Product"]["name"], "Widget");
    Ok(())
}

#[tokio::test]
async fn get_by_id_miss_publishes_error_without_payload() -> Result<()> {
    let harness = setup_relay(Some("products")).await?;
    let mut results = harness.subscribe_results().await?;
    harness.consumer.start().await?;

    harness
        .publish_command(r#"{"Id":42,"Status":"getById"}"#)
        .await?;

    let body: Value = serde_json::from_slice(&results.next().await.unwrap())?;
    assert_eq!(body["Status"], "error");
    assert_eq!(body["Message"], "Error al obtener producto");
    assert!(body.get("Product").is_none());
    Ok(())
}

#[tokio::test]
async fn update_and_delete_round_trip() -> Result<()> {
    let harness = setup_relay(Some("products")).await?;
    harness.products.seed(Product::new(7, "Widget", 9.99));
    let mut results = harness.subscribe_results().await?;
    harness.consumer.start().await?;

    harness
        .publish_command(r#"{"Id":7,"Name":"Gadget","Price":19.99,"Status":"put"}"#)
        .await?;
    let body: Value = serde_json::from_slice(&results.next().await.unwrap())?;
    assert_eq!(body["Message"], "Producto actualizado exitosamente");

    harness
        .publish_command(r#"{"Id":7,"Status":"delete"}"#)
        .await?;
    let body: Value = serde_json::from_slice(&results.next().await.unwrap())?;
    assert_eq!(body["Message"], "Producto eliminado exitosamente");

    assert!(harness.products.get_all().await?.is_empty());
    Ok(())
}

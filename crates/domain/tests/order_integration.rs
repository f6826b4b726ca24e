//! Integration tests for the order placement flow.

use std::collections::HashSet;
use std::sync::Arc;

use domain::{CustomerDetails, ORDER_PLACED_TOPIC, OrderPlacementService, OrderRequest};
use inventory::InMemoryInventoryGateway;
use messaging::InMemoryEventPublisher;
use order_store::InMemoryOrderStore;
use rust_decimal_macros::dec;

fn request(sku_code: &str, quantity: i32) -> OrderRequest {
    OrderRequest {
        sku_code: Some(sku_code.to_string()),
        quantity: Some(quantity),
        price: Some(dec!(999.99)),
        customer: CustomerDetails {
            email: Some("a@b.com".to_string()),
            first_name: Some("A".to_string()),
            last_name: Some("B".to_string()),
        },
    }
}

#[tokio::test]
async fn full_placement_flow() {
    let store = InMemoryOrderStore::new();
    let inventory = InMemoryInventoryGateway::new();
    let publisher = InMemoryEventPublisher::new();
    inventory.set_stock("iphone_15", 5);

    let service = OrderPlacementService::new(store.clone(), inventory.clone(), publisher.clone());

    service.place_order(request("iphone_15", 1)).await.unwrap();

    let orders = store.orders().await;
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].sku_code, "iphone_15");
    assert_eq!(orders[0].quantity, 1);
    assert_eq!(orders[0].price, Some(dec!(999.99)));

    let messages = publisher.messages();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].topic, ORDER_PLACED_TOPIC);

    let payload: serde_json::Value = serde_json::from_str(&messages[0].payload).unwrap();
    assert_eq!(
        payload["order_number"].as_str().unwrap(),
        orders[0].order_number.to_string()
    );
    assert_eq!(payload["email"], "a@b.com");
}

#[tokio::test(flavor = "multi_thread")]
async fn concurrent_placements_are_independent() {
    let store = InMemoryOrderStore::new();
    let inventory = InMemoryInventoryGateway::new();
    let publisher = InMemoryEventPublisher::new();
    inventory.set_stock("iphone_15", 100);

    let service = Arc::new(OrderPlacementService::new(
        store.clone(),
        inventory,
        publisher.clone(),
    ));

    let mut handles = Vec::new();
    for _ in 0..10 {
        let service = service.clone();
        handles.push(tokio::spawn(async move {
            service.place_order(request("iphone_15", 1)).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let orders = store.orders().await;
    assert_eq!(orders.len(), 10);

    let numbers: HashSet<String> = orders
        .iter()
        .map(|order| order.order_number.to_string())
        .collect();
    assert_eq!(numbers.len(), 10);

    assert_eq!(publisher.messages().len(), 10);
}

#[tokio::test]
async fn mixed_outcomes_leave_consistent_state() {
    let store = InMemoryOrderStore::new();
    let inventory = InMemoryInventoryGateway::new();
    let publisher = InMemoryEventPublisher::new();
    inventory.set_stock("iphone_15", 1);

    let service = OrderPlacementService::new(store.clone(), inventory.clone(), publisher.clone());

    // In stock for one unit, not for three
    service.place_order(request("iphone_15", 1)).await.unwrap();
    service
        .place_order(request("iphone_15", 3))
        .await
        .unwrap_err();
    service.place_order(request("pixel_9", 1)).await.unwrap_err();

    assert_eq!(store.saved_count().await, 1);
    assert_eq!(publisher.messages().len(), 1);
    assert_eq!(inventory.check_count(), 3);
}

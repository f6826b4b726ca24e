//! PostgreSQL integration tests
//!
//! These tests use a shared PostgreSQL container for efficiency and are
//! serialized with `serial_test` since they share the `orders` table.

use std::sync::Arc;

use common::OrderNumber;
use order_store::{NewOrder, OrderStore, OrderStoreError, PostgresOrderStore};
use rust_decimal_macros::dec;
use serial_test::serial;
use sqlx::PgPool;
use testcontainers::{ContainerAsync, runners::AsyncRunner};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

/// Shared container info - container stays alive for all tests
struct ContainerInfo {
    #[allow(dead_code)] // Container must stay alive for tests
    container: ContainerAsync<Postgres>,
    connection_string: String,
}

/// Global shared container
static CONTAINER: OnceCell<Arc<ContainerInfo>> = OnceCell::const_new();

async fn get_container_info() -> Arc<ContainerInfo> {
    CONTAINER
        .get_or_init(|| async {
            let container = Postgres::default().start().await.unwrap();

            let host = container.get_host().await.unwrap();
            let port = container.get_host_port_ipv4(5432).await.unwrap();

            let connection_string =
                format!("postgres://postgres:postgres@{}:{}/postgres", host, port);

            // Create a temporary pool just for the schema
            let temp_pool = PgPool::connect(&connection_string).await.unwrap();

            sqlx::raw_sql(include_str!(
                "../../../migrations/001_create_orders_table.sql"
            ))
            .execute(&temp_pool)
            .await
            .unwrap();

            temp_pool.close().await;

            Arc::new(ContainerInfo {
                container,
                connection_string,
            })
        })
        .await
        .clone()
}

/// Get a fresh store with its own pool and a cleared table
async fn get_test_store() -> PostgresOrderStore {
    let info = get_container_info().await;

    let pool = sqlx::postgres::PgPoolOptions::new()
        .max_connections(5)
        .connect(&info.connection_string)
        .await
        .unwrap();

    sqlx::query("TRUNCATE TABLE orders")
        .execute(&pool)
        .await
        .unwrap();

    PostgresOrderStore::new(pool)
}

fn sample_order() -> NewOrder {
    NewOrder {
        order_number: OrderNumber::new(),
        sku_code: "iphone_15".to_string(),
        quantity: 1,
        price: Some(dec!(999.99)),
    }
}

#[tokio::test]
#[serial]
async fn save_returns_row_with_assigned_id() {
    let store = get_test_store().await;

    let new_order = sample_order();
    let saved = store.save(new_order.clone()).await.unwrap();

    assert!(saved.id > 0);
    assert_eq!(saved.order_number, new_order.order_number);
    assert_eq!(saved.sku_code, new_order.sku_code);
    assert_eq!(saved.quantity, new_order.quantity);
    assert_eq!(saved.price, new_order.price);
}

#[tokio::test]
#[serial]
async fn saved_order_roundtrips_exactly() {
    let store = get_test_store().await;

    let saved = store.save(sample_order()).await.unwrap();
    let loaded = store
        .find_by_order_number(saved.order_number)
        .await
        .unwrap()
        .expect("order should exist");

    assert_eq!(loaded, saved);
    // NUMERIC must preserve the decimal value exactly
    assert_eq!(loaded.price, Some(dec!(999.99)));
}

#[tokio::test]
#[serial]
async fn save_without_price_stores_null() {
    let store = get_test_store().await;

    let new_order = NewOrder {
        price: None,
        ..sample_order()
    };
    let saved = store.save(new_order).await.unwrap();
    let loaded = store
        .find_by_order_number(saved.order_number)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(loaded.price, None);
}

#[tokio::test]
#[serial]
async fn duplicate_order_number_is_rejected() {
    let store = get_test_store().await;

    let order = sample_order();
    store.save(order.clone()).await.unwrap();

    let err = store.save(order).await.unwrap_err();
    assert!(matches!(err, OrderStoreError::DuplicateOrderNumber { .. }));
}

#[tokio::test]
#[serial]
async fn ids_increase_across_saves() {
    let store = get_test_store().await;

    let first = store.save(sample_order()).await.unwrap();
    let second = store.save(sample_order()).await.unwrap();

    assert!(second.id > first.id);
}

#[tokio::test]
#[serial]
async fn missing_order_number_returns_none() {
    let store = get_test_store().await;

    let found = store.find_by_order_number(OrderNumber::new()).await.unwrap();
    assert!(found.is_none());
}

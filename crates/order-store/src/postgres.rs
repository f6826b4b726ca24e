use async_trait::async_trait;
use common::OrderNumber;
use rust_decimal::Decimal;
use sqlx::{PgPool, Row, postgres::PgRow};
use uuid::Uuid;

use crate::{
    NewOrder, Order, OrderStoreError, Result,
    store::OrderStore,
};

/// PostgreSQL-backed order store implementation.
#[derive(Clone)]
pub struct PostgresOrderStore {
    pool: PgPool,
}

impl PostgresOrderStore {
    /// Creates a new PostgreSQL order store.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Gets a reference to the underlying connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Runs the database migrations.
    pub async fn run_migrations(&self) -> std::result::Result<(), sqlx::migrate::MigrateError> {
        sqlx::migrate!("../../migrations").run(&self.pool).await
    }

    /// Looks up an order by its order number. Not part of the store
    /// contract; used for verification and tooling.
    pub async fn find_by_order_number(&self, order_number: OrderNumber) -> Result<Option<Order>> {
        let row = sqlx::query(
            r#"
            SELECT id, order_number, sku_code, quantity, price
            FROM orders
            WHERE order_number = $1
            "#,
        )
        .bind(order_number.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Self::row_to_order).transpose()
    }

    fn row_to_order(row: PgRow) -> Result<Order> {
        Ok(Order {
            id: row.try_get("id")?,
            order_number: OrderNumber::from_uuid(row.try_get::<Uuid, _>("order_number")?),
            sku_code: row.try_get("sku_code")?,
            quantity: row.try_get("quantity")?,
            price: row.try_get::<Option<Decimal>, _>("price")?,
        })
    }
}

#[async_trait]
impl OrderStore for PostgresOrderStore {
    async fn save(&self, order: NewOrder) -> Result<Order> {
        let row = sqlx::query(
            r#"
            INSERT INTO orders (order_number, sku_code, quantity, price)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(order.order_number.as_uuid())
        .bind(&order.sku_code)
        .bind(order.quantity)
        .bind(order.price)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.constraint() == Some("unique_order_number")
            {
                return OrderStoreError::DuplicateOrderNumber {
                    order_number: order.order_number.to_string(),
                };
            }
            OrderStoreError::Database(e)
        })?;

        let id: i64 = row.try_get("id")?;
        tracing::debug!(order_number = %order.order_number, id, "order row inserted");
        Ok(order.into_order(id))
    }
}

use thiserror::Error;

/// Errors that can occur when persisting orders.
#[derive(Debug, Error)]
pub enum OrderStoreError {
    /// An order with the same order number already exists.
    #[error("Duplicate order number: {order_number}")]
    DuplicateOrderNumber { order_number: String },

    /// A database error occurred.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A database migration error occurred.
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// The store rejected the write without a more specific cause.
    #[error("Order store unavailable: {0}")]
    Unavailable(String),
}

/// Result type for order store operations.
pub type Result<T> = std::result::Result<T, OrderStoreError>;

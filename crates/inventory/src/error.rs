use thiserror::Error;

/// Errors that can occur when querying the inventory service.
#[derive(Debug, Error)]
pub enum InventoryError {
    /// The request never produced a definitive answer (connection failure,
    /// timeout, non-2xx response, undecodable body).
    #[error("Inventory request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The gateway was unreachable without a more specific cause.
    #[error("Inventory service unavailable: {0}")]
    Unavailable(String),
}

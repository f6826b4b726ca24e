use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::{InventoryError, gateway::InventoryGateway};

#[derive(Debug, Default)]
struct InMemoryState {
    stock: HashMap<String, i32>,
    checks: u32,
    fail_on_check: bool,
}

/// In-memory inventory gateway for testing.
///
/// Holds a SKU → available-quantity table and counts how often it was
/// queried. Cloning shares the underlying state.
#[derive(Debug, Clone, Default)]
pub struct InMemoryInventoryGateway {
    state: Arc<RwLock<InMemoryState>>,
}

impl InMemoryInventoryGateway {
    /// Creates a new gateway with an empty stock table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the available quantity for a SKU.
    pub fn set_stock(&self, sku_code: impl Into<String>, quantity: i32) {
        self.state
            .write()
            .unwrap()
            .stock
            .insert(sku_code.into(), quantity);
    }

    /// Configures the gateway to fail on subsequent checks.
    pub fn set_fail_on_check(&self, fail: bool) {
        self.state.write().unwrap().fail_on_check = fail;
    }

    /// Returns the number of stock checks performed.
    pub fn check_count(&self) -> u32 {
        self.state.read().unwrap().checks
    }
}

#[async_trait]
impl InventoryGateway for InMemoryInventoryGateway {
    async fn is_in_stock(&self, sku_code: &str, quantity: i32) -> Result<bool, InventoryError> {
        let mut state = self.state.write().unwrap();
        state.checks += 1;

        if state.fail_on_check {
            return Err(InventoryError::Unavailable(
                "simulated gateway failure".to_string(),
            ));
        }

        Ok(state
            .stock
            .get(sku_code)
            .is_some_and(|available| *available >= quantity))
    }
}

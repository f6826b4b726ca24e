use async_trait::async_trait;

use crate::{InventoryError, gateway::InventoryGateway};

/// HTTP client for the inventory service.
///
/// Calls `GET {base_url}/api/inventory?skuCode=..&quantity=..` and decodes
/// the JSON boolean body. The query parameter names are the inventory
/// service's contract, not ours.
#[derive(Clone)]
pub struct HttpInventoryGateway {
    client: reqwest::Client,
    base_url: String,
}

impl HttpInventoryGateway {
    /// Creates a gateway client for the inventory service at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl InventoryGateway for HttpInventoryGateway {
    async fn is_in_stock(&self, sku_code: &str, quantity: i32) -> Result<bool, InventoryError> {
        let quantity_param = quantity.to_string();
        let in_stock = self
            .client
            .get(format!("{}/api/inventory", self.base_url))
            .query(&[("skuCode", sku_code), ("quantity", quantity_param.as_str())])
            .send()
            .await?
            .error_for_status()?
            .json::<bool>()
            .await?;

        tracing::debug!(sku_code, quantity, in_stock, "inventory check completed");
        Ok(in_stock)
    }
}

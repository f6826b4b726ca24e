use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Globally unique order number assigned when an order is placed.
///
/// Wraps a random (v4) UUID so order numbers cannot collide across
/// instances and cannot be confused with store-assigned row ids.
/// Rendered in the canonical hyphenated form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(Uuid);

impl OrderNumber {
    /// Generates a fresh random order number.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an order number from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for OrderNumber {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for OrderNumber {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<OrderNumber> for Uuid {
    fn from(number: OrderNumber) -> Self {
        number.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_number_new_creates_unique_values() {
        let a = OrderNumber::new();
        let b = OrderNumber::new();
        assert_ne!(a, b);
    }

    #[test]
    fn order_number_from_uuid_preserves_value() {
        let uuid = Uuid::new_v4();
        let number = OrderNumber::from_uuid(uuid);
        assert_eq!(number.as_uuid(), uuid);
    }

    #[test]
    fn order_number_displays_canonical_form() {
        let number = OrderNumber::new();
        let rendered = number.to_string();
        assert_eq!(rendered.len(), 36);
        assert_eq!(Uuid::parse_str(&rendered).unwrap(), number.as_uuid());
    }

    #[test]
    fn order_number_serialization_roundtrip() {
        let number = OrderNumber::new();
        let json = serde_json::to_string(&number).unwrap();
        let deserialized: OrderNumber = serde_json::from_str(&json).unwrap();
        assert_eq!(number, deserialized);
    }
}

use crate::domain::common::EntityId;
use serde::{Deserialize, Serialize};

/// Unique identifier of a stock item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StockItemId(pub i64);

impl StockItemId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl EntityId for StockItemId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(StockItemId::new)
            .map_err(|e| format!("Invalid id: {}", e))
    }
}

/// Warehouse stock position for one product.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockItem {
    pub id: StockItemId,
    pub product_name: String,
    pub sku: String,
    pub current_stock: u32,
    pub min_stock: u32,
    pub max_stock: u32,
    /// Shelf location, e.g. "A-01-01"
    pub location: String,
}

impl StockItem {
    pub fn new(
        id: i64,
        product_name: &str,
        sku: &str,
        current_stock: u32,
        min_stock: u32,
        max_stock: u32,
        location: &str,
    ) -> Self {
        Self {
            id: StockItemId::new(id),
            product_name: product_name.to_string(),
            sku: sku.to_string(),
            current_stock,
            min_stock,
            max_stock,
            location: location.to_string(),
        }
    }

    /// Below the configured minimum.
    pub fn is_low(&self) -> bool {
        self.current_stock < self.min_stock
    }

    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.product_name.to_lowercase().contains(&term)
            || self.sku.to_lowercase().contains(&term)
            || self.location.to_lowercase().contains(&term)
    }
}

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementKind {
    Inbound,
    Outbound,
}

impl MovementKind {
    /// Display label (pt-BR)
    pub fn label(&self) -> &'static str {
        match self {
            MovementKind::Inbound => "Entrada",
            MovementKind::Outbound => "Saída",
        }
    }
}

/// One entry of the stock movement journal (read-only mock data).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockMovement {
    pub id: i64,
    /// DD/MM/YYYY
    pub date: String,
    pub product_name: String,
    pub kind: MovementKind,
    pub quantity: u32,
    pub notes: String,
}

impl StockMovement {
    pub fn new(
        id: i64,
        date: &str,
        product_name: &str,
        kind: MovementKind,
        quantity: u32,
        notes: &str,
    ) -> Self {
        Self {
            id,
            date: date.to_string(),
            product_name: product_name.to_string(),
            kind,
            quantity,
            notes: notes.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn low_stock_is_strictly_below_minimum() {
        let at_min = StockItem::new(1, "Smartphone X", "SP-001", 5, 5, 30, "A-01-01");
        let below = StockItem::new(2, "Monitor 27\"", "MO-006", 3, 5, 15, "C-01-01");
        assert!(!at_min.is_low());
        assert!(below.is_low());
    }
}

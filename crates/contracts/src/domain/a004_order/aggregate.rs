use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Lifecycle status of a sales order.
///
/// A tagged enum rather than a free-form string so an invalid status is
/// unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Completed,
    Processing,
    Cancelled,
}

impl OrderStatus {
    /// Display label (pt-BR)
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Completed => "Concluído",
            OrderStatus::Processing => "Processando",
            OrderStatus::Cancelled => "Cancelado",
        }
    }
}

/// One line of a sales order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub product: String,
    pub price: Decimal,
    pub quantity: u32,
}

impl OrderItem {
    pub fn new(id: &str, product: &str, price: Decimal, quantity: u32) -> Self {
        Self {
            id: id.to_string(),
            product: product.to_string(),
            price,
            quantity,
        }
    }
}

/// A registered sales order (read-only mock data).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Business code, e.g. "ORD-001"
    pub id: String,
    pub customer: String,
    /// DD/MM/YYYY
    pub date: String,
    pub total: Decimal,
    pub status: OrderStatus,
    pub payment_method: String,
    pub items: Vec<OrderItem>,
}

impl Order {
    pub fn new(
        id: &str,
        customer: &str,
        date: &str,
        total: Decimal,
        status: OrderStatus,
        payment_method: &str,
        items: Vec<OrderItem>,
    ) -> Self {
        Self {
            id: id.to_string(),
            customer: customer.to_string(),
            date: date.to_string(),
            total,
            status,
            payment_method: payment_method.to_string(),
            items,
        }
    }

    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.id.to_lowercase().contains(&term) || self.customer.to_lowercase().contains(&term)
    }
}

use crate::domain::common::EntityId;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a customer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CustomerId(pub i64);

impl CustomerId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl EntityId for CustomerId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(CustomerId::new)
            .map_err(|e| format!("Invalid id: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Customer from the static directory. At most one customer is attached to
/// a checkout session at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: CustomerId,
    pub code: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    /// Registration date, DD/MM/YYYY
    pub registered: String,
    /// Last purchase date, DD/MM/YYYY
    pub last_purchase: String,
    pub total_spent: rust_decimal::Decimal,
    pub active: bool,
}

impl Customer {
    pub fn new(id: i64, code: &str, name: &str, email: &str, phone: &str) -> Self {
        Self {
            id: CustomerId::new(id),
            code: code.to_string(),
            name: name.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            city: String::new(),
            registered: String::new(),
            last_purchase: String::new(),
            total_spent: rust_decimal::Decimal::ZERO,
            active: true,
        }
    }

    /// Fill the profile fields shown on the customers screen.
    pub fn with_profile(
        mut self,
        city: &str,
        registered: &str,
        last_purchase: &str,
        total_spent: rust_decimal::Decimal,
        active: bool,
    ) -> Self {
        self.city = city.to_string();
        self.registered = registered.to_string();
        self.last_purchase = last_purchase.to_string();
        self.total_spent = total_spent;
        self.active = active;
        self
    }

    /// Case-insensitive contains match on name, code and email.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.code.to_lowercase().contains(&term)
            || self.email.to_lowercase().contains(&term)
    }
}

use crate::domain::common::EntityId;
use serde::{Deserialize, Serialize};

/// Unique identifier of a supplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SupplierId(pub i64);

impl SupplierId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl EntityId for SupplierId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(SupplierId::new)
            .map_err(|e| format!("Invalid id: {}", e))
    }
}

/// Supplier record from the static directory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    pub contact: String,
    pub email: String,
    pub phone: String,
    pub city: String,
    pub category: String,
    /// Registration date, DD/MM/YYYY
    pub since: String,
    /// Last purchase order date, DD/MM/YYYY
    pub last_order: String,
}

impl Supplier {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: i64,
        name: &str,
        contact: &str,
        email: &str,
        phone: &str,
        city: &str,
        category: &str,
        since: &str,
        last_order: &str,
    ) -> Self {
        Self {
            id: SupplierId::new(id),
            name: name.to_string(),
            contact: contact.to_string(),
            email: email.to_string(),
            phone: phone.to_string(),
            city: city.to_string(),
            category: category.to_string(),
            since: since.to_string(),
            last_order: last_order.to_string(),
        }
    }

    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term)
            || self.contact.to_lowercase().contains(&term)
            || self.email.to_lowercase().contains(&term)
            || self.category.to_lowercase().contains(&term)
    }
}

use crate::domain::common::EntityId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a catalog product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProductId(pub i64);

impl ProductId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }
}

impl EntityId for ProductId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        s.parse::<i64>()
            .map(ProductId::new)
            .map_err(|e| format!("Invalid id: {}", e))
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Catalog product. Immutable within a session; sourced from the static
/// catalog provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub code: String,
    pub name: String,
    pub price: Decimal,
    pub stock: u32,
    pub category: String,
}

impl Product {
    pub fn new(id: i64, code: &str, name: &str, price: Decimal, stock: u32) -> Self {
        Self {
            id: ProductId::new(id),
            code: code.to_string(),
            name: name.to_string(),
            price,
            stock,
            category: String::new(),
        }
    }

    pub fn with_category(mut self, category: &str) -> Self {
        self.category = category.to_string();
        self
    }

    /// Case-insensitive contains match on name and code, used by the
    /// product search box.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.code.to_lowercase().contains(&term)
    }
}

/// Exact code lookup in a catalog slice.
///
/// The match is case-sensitive and does not trim whitespace, mirroring the
/// behaviour of the barcode input path. Code casing is not normalized.
pub fn find_by_code<'a>(catalog: &'a [Product], code: &str) -> Option<&'a Product> {
    catalog.iter().find(|p| p.code == code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(1, "P001", "Notebook Acer Aspire 5", dec!(3299.90), 15),
            Product::new(2, "P002", "Monitor Dell 24\"", dec!(999.90), 23),
        ]
    }

    #[test]
    fn find_by_code_is_exact() {
        let catalog = catalog();
        assert_eq!(
            find_by_code(&catalog, "P001").map(|p| p.id),
            Some(ProductId::new(1))
        );
        assert!(find_by_code(&catalog, "ZZZZ").is_none());
    }

    #[test]
    fn find_by_code_is_case_sensitive() {
        let catalog = catalog();
        assert!(find_by_code(&catalog, "p001").is_none());
        assert!(find_by_code(&catalog, " P001").is_none());
    }

    #[test]
    fn search_matches_name_and_code_case_insensitive() {
        let catalog = catalog();
        assert!(catalog[0].matches_search("acer"));
        assert!(catalog[0].matches_search("p001"));
        assert!(!catalog[0].matches_search("dell"));
    }
}

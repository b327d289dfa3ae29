use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Emission status of a fiscal invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Issued,
    Pending,
    Cancelled,
}

impl InvoiceStatus {
    /// Display label (pt-BR)
    pub fn label(&self) -> &'static str {
        match self {
            InvoiceStatus::Issued => "Emitida",
            InvoiceStatus::Pending => "Pendente",
            InvoiceStatus::Cancelled => "Cancelada",
        }
    }
}

/// A fiscal invoice (read-only mock data). Plan-gated feature: the free
/// plan has no access to invoices, see `system::policy`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Business code, e.g. "NF-001"
    pub id: String,
    pub customer: String,
    /// DD/MM/YYYY
    pub date: String,
    pub total: Decimal,
    pub status: InvoiceStatus,
}

impl Invoice {
    pub fn new(id: &str, customer: &str, date: &str, total: Decimal, status: InvoiceStatus) -> Self {
        Self {
            id: id.to_string(),
            customer: customer.to_string(),
            date: date.to_string(),
            total,
            status,
        }
    }

    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.id.to_lowercase().contains(&term) || self.customer.to_lowercase().contains(&term)
    }
}

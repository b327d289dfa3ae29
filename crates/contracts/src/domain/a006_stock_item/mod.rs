pub mod aggregate;

pub use aggregate::{MovementKind, StockItem, StockItemId, StockMovement};

//! Catalog provider: the static list of purchasable products used by the
//! point-of-sale screen. Read-only within a session.

use contracts::domain::a001_product::Product;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

fn price(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

static CATALOG: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        Product::new(1, "P001", "Notebook Acer Aspire 5", price(3299_90), 15),
        Product::new(2, "P002", "Monitor Dell 24\"", price(999_90), 23),
        Product::new(3, "P003", "Mouse Logitech MX Master", price(349_90), 42),
        Product::new(4, "P004", "Teclado Mecânico Redragon", price(259_90), 18),
        Product::new(5, "P005", "Headset HyperX Cloud", price(399_90), 27),
        Product::new(6, "P006", "SSD Kingston 480GB", price(329_90), 56),
        Product::new(7, "P007", "Cadeira Gamer ThunderX3", price(1299_90), 8),
        Product::new(8, "P008", "Mousepad Gamer XL", price(89_90), 31),
        Product::new(9, "P009", "Webcam Logitech C920", price(499_90), 12),
        Product::new(10, "P010", "Caixa de Som JBL", price(199_90), 24),
    ]
});

/// The full point-of-sale catalog.
pub fn all() -> &'static [Product] {
    &CATALOG
}

pub mod a001_product;
pub mod a002_customer;
pub mod a003_supplier;
pub mod a004_order;
pub mod a005_invoice;
pub mod a006_stock_item;

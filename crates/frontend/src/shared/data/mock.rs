//! Mock data backing the list screens and the overview dashboard.

use contracts::domain::a001_product::Product;
use contracts::domain::a002_customer::Customer;
use contracts::domain::a003_supplier::Supplier;
use contracts::domain::a004_order::{Order, OrderItem, OrderStatus};
use contracts::domain::a005_invoice::{Invoice, InvoiceStatus};
use contracts::domain::a006_stock_item::{MovementKind, StockItem, StockMovement};
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

fn amount(cents: i64) -> Decimal {
    Decimal::new(cents, 2)
}

// ---------------------------------------------------------------------------
// Products (catalog management screen)
// ---------------------------------------------------------------------------

static PRODUCTS: Lazy<Vec<Product>> = Lazy::new(|| {
    vec![
        Product::new(1, "SP-001", "Smartphone X", amount(1299_99), 15).with_category("Eletrônicos"),
        Product::new(2, "LP-002", "Laptop Pro", amount(3499_99), 8).with_category("Eletrônicos"),
        Product::new(3, "HP-003", "Headphone Premium", amount(299_99), 22)
            .with_category("Acessórios"),
        Product::new(4, "MW-004", "Mouse Wireless", amount(89_99), 34).with_category("Acessórios"),
        Product::new(5, "TM-005", "Teclado Mecânico", amount(199_99), 12)
            .with_category("Acessórios"),
        Product::new(6, "MO-006", "Monitor 27\"", amount(899_99), 5).with_category("Eletrônicos"),
        Product::new(7, "CS-007", "Caixa de Som Bluetooth", amount(149_99), 18)
            .with_category("Acessórios"),
        Product::new(8, "CD-008", "Câmera DSLR", amount(2999_99), 3).with_category("Eletrônicos"),
    ]
});

pub fn products() -> &'static [Product] {
    &PRODUCTS
}

// ---------------------------------------------------------------------------
// Customers (registry screen; the POS picker uses data::directory)
// ---------------------------------------------------------------------------

static CUSTOMERS: Lazy<Vec<Customer>> = Lazy::new(|| {
    vec![
        Customer::new(1, "CLT-001", "Maria Silva", "maria@exemplo.com", "(11) 98765-4321")
            .with_profile("São Paulo", "12/01/2023", "15/04/2023", amount(1230_50), true),
        Customer::new(2, "CLT-002", "João Santos", "joao@exemplo.com", "(11) 97654-3210")
            .with_profile("São Paulo", "05/02/2023", "14/04/2023", amount(895_75), true),
        Customer::new(3, "CLT-003", "Ana Oliveira", "ana@exemplo.com", "(21) 98765-1234")
            .with_profile("Rio de Janeiro", "20/12/2022", "10/04/2023", amount(2450_00), true),
        Customer::new(4, "CLT-004", "Carlos Pereira", "carlos@exemplo.com", "(11) 91234-5678")
            .with_profile("São Paulo", "15/03/2023", "08/04/2023", amount(375_25), false),
        Customer::new(5, "CLT-005", "Luciana Costa", "luciana@exemplo.com", "(31) 98877-6655")
            .with_profile("Belo Horizonte", "10/01/2023", "05/04/2023", amount(1875_30), true),
        Customer::new(6, "CLT-006", "Roberto Almeida", "roberto@exemplo.com", "(11) 92233-4455")
            .with_profile("São Paulo", "25/02/2023", "01/04/2023", amount(765_90), true),
        Customer::new(7, "CLT-007", "Fernanda Lima", "fernanda@exemplo.com", "(21) 93344-5566")
            .with_profile("Rio de Janeiro", "05/03/2023", "25/03/2023", amount(3250_75), false),
        Customer::new(8, "CLT-008", "Ricardo Souza", "ricardo@exemplo.com", "(41) 99988-7766")
            .with_profile("Curitiba", "18/01/2023", "20/03/2023", amount(950_00), true),
    ]
});

pub fn customers() -> &'static [Customer] {
    &CUSTOMERS
}

// ---------------------------------------------------------------------------
// Suppliers
// ---------------------------------------------------------------------------

static SUPPLIERS: Lazy<Vec<Supplier>> = Lazy::new(|| {
    vec![
        Supplier::new(
            1,
            "Tech Solutions",
            "Carlos Silva",
            "contato@techsolutions.com",
            "(11) 3456-7890",
            "São Paulo",
            "Eletrônicos",
            "12/01/2021",
            "10/04/2023",
        ),
        Supplier::new(
            2,
            "Office Supplies Co.",
            "Ana Rodrigues",
            "vendas@officesupplies.com",
            "(11) 2345-6789",
            "São Paulo",
            "Escritório",
            "05/03/2022",
            "05/04/2023",
        ),
        Supplier::new(
            3,
            "Global Imports",
            "Roberto Santos",
            "contato@globalimports.com",
            "(21) 3456-7890",
            "Rio de Janeiro",
            "Importados",
            "20/06/2021",
            "01/04/2023",
        ),
        Supplier::new(
            4,
            "Digital World",
            "Marina Lima",
            "vendas@digitalworld.com",
            "(11) 4567-8901",
            "São Paulo",
            "Eletrônicos",
            "15/04/2022",
            "25/03/2023",
        ),
        Supplier::new(
            5,
            "Smart Devices",
            "Fernando Costa",
            "contato@smartdevices.com",
            "(31) 2345-6789",
            "Belo Horizonte",
            "Eletrônicos",
            "10/08/2021",
            "20/03/2023",
        ),
        Supplier::new(
            6,
            "Clean Solutions",
            "Carla Oliveira",
            "vendas@cleansolutions.com",
            "(11) 5678-9012",
            "São Paulo",
            "Limpeza",
            "25/11/2022",
            "15/03/2023",
        ),
    ]
});

pub fn suppliers() -> &'static [Supplier] {
    &SUPPLIERS
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

static ORDERS: Lazy<Vec<Order>> = Lazy::new(|| {
    vec![
        Order::new(
            "ORD-001",
            "Maria Silva",
            "15/04/2023",
            amount(1349_89),
            OrderStatus::Completed,
            "Cartão de Crédito",
            vec![
                OrderItem::new("1", "Smartphone X", amount(1299_99), 1),
                OrderItem::new("2", "Capa Protetora", amount(49_90), 1),
            ],
        ),
        Order::new(
            "ORD-002",
            "João Santos",
            "15/04/2023",
            amount(89_90),
            OrderStatus::Processing,
            "Cartão de Débito",
            vec![OrderItem::new("1", "Mouse Wireless", amount(89_90), 1)],
        ),
        Order::new(
            "ORD-003",
            "Ana Oliveira",
            "14/04/2023",
            amount(2999_95),
            OrderStatus::Completed,
            "PIX",
            vec![OrderItem::new("1", "Laptop Pro", amount(2999_95), 1)],
        ),
        Order::new(
            "ORD-004",
            "Carlos Pereira",
            "14/04/2023",
            amount(449_97),
            OrderStatus::Completed,
            "Dinheiro",
            vec![
                OrderItem::new("1", "Headphone Premium", amount(299_99), 1),
                OrderItem::new("2", "Mouse Wireless", amount(149_98), 1),
            ],
        ),
        Order::new(
            "ORD-005",
            "Luciana Costa",
            "13/04/2023",
            amount(3249_97),
            OrderStatus::Cancelled,
            "Cartão de Crédito",
            vec![
                OrderItem::new("1", "Laptop Pro", amount(2999_99), 1),
                OrderItem::new("2", "Mouse Wireless", amount(89_99), 1),
                OrderItem::new("3", "Capa para Laptop", amount(159_99), 1),
            ],
        ),
        Order::new(
            "ORD-006",
            "Roberto Almeida",
            "12/04/2023",
            amount(1399_98),
            OrderStatus::Completed,
            "PIX",
            vec![
                OrderItem::new("1", "Smartphone X", amount(1299_99), 1),
                OrderItem::new("2", "Carregador Rápido", amount(99_99), 1),
            ],
        ),
    ]
});

pub fn orders() -> &'static [Order] {
    &ORDERS
}

// ---------------------------------------------------------------------------
// Invoices
// ---------------------------------------------------------------------------

static INVOICES: Lazy<Vec<Invoice>> = Lazy::new(|| {
    vec![
        Invoice::new(
            "NF-001",
            "Empresa ABC Ltda",
            "15/05/2023",
            amount(1250_00),
            InvoiceStatus::Issued,
        ),
        Invoice::new(
            "NF-002",
            "Mercado XYZ",
            "18/05/2023",
            amount(3780_50),
            InvoiceStatus::Issued,
        ),
        Invoice::new(
            "NF-003",
            "Distribuidora 123",
            "20/05/2023",
            amount(5490_00),
            InvoiceStatus::Pending,
        ),
        Invoice::new(
            "NF-004",
            "Farmácia Bem Estar",
            "22/05/2023",
            amount(890_25),
            InvoiceStatus::Cancelled,
        ),
        Invoice::new(
            "NF-005",
            "Restaurante Sabor Gourmet",
            "25/05/2023",
            amount(2350_00),
            InvoiceStatus::Issued,
        ),
    ]
});

pub fn invoices() -> &'static [Invoice] {
    &INVOICES
}

// ---------------------------------------------------------------------------
// Stock
// ---------------------------------------------------------------------------

static STOCK_ITEMS: Lazy<Vec<StockItem>> = Lazy::new(|| {
    vec![
        StockItem::new(1, "Smartphone X", "SP-001", 15, 5, 30, "A-01-01"),
        StockItem::new(2, "Laptop Pro", "LP-002", 8, 5, 20, "A-02-03"),
        StockItem::new(3, "Headphone Premium", "HP-003", 22, 10, 40, "B-01-02"),
        StockItem::new(4, "Mouse Wireless", "MW-004", 4, 5, 30, "B-02-01"),
        StockItem::new(5, "Teclado Mecânico", "TM-005", 12, 8, 25, "B-02-02"),
        StockItem::new(6, "Monitor 27\"", "MO-006", 3, 5, 15, "C-01-01"),
        StockItem::new(7, "Caixa de Som Bluetooth", "CS-007", 18, 10, 35, "C-02-03"),
        StockItem::new(8, "Câmera DSLR", "CD-008", 2, 5, 15, "D-01-02"),
    ]
});

pub fn stock_items() -> &'static [StockItem] {
    &STOCK_ITEMS
}

static STOCK_MOVEMENTS: Lazy<Vec<StockMovement>> = Lazy::new(|| {
    vec![
        StockMovement::new(1, "15/04/2023", "Laptop Pro", MovementKind::Inbound, 5, "Reposição de estoque"),
        StockMovement::new(2, "15/04/2023", "Smartphone X", MovementKind::Outbound, 2, "Venda #5678"),
        StockMovement::new(3, "14/04/2023", "Headphone Premium", MovementKind::Inbound, 10, "Reposição de estoque"),
        StockMovement::new(4, "14/04/2023", "Monitor 27\"", MovementKind::Outbound, 1, "Venda #5680"),
        StockMovement::new(5, "13/04/2023", "Câmera DSLR", MovementKind::Outbound, 1, "Venda #5682"),
    ]
});

pub fn stock_movements() -> &'static [StockMovement] {
    &STOCK_MOVEMENTS
}

// ---------------------------------------------------------------------------
// Overview dashboard
// ---------------------------------------------------------------------------

/// Monthly sales totals for the bar chart: (month label, total).
pub static MONTHLY_SALES: [(&str, i64); 7] = [
    ("Jan", 2400),
    ("Fev", 1398),
    ("Mar", 9800),
    ("Abr", 3908),
    ("Mai", 4800),
    ("Jun", 3800),
    ("Jul", 4300),
];

/// Recent orders for the overview table: (id, customer, total, status, date).
pub struct RecentOrder {
    pub id: &'static str,
    pub customer: &'static str,
    pub total: &'static str,
    pub status: OrderStatus,
    pub date: &'static str,
}

pub static RECENT_ORDERS: [RecentOrder; 5] = [
    RecentOrder { id: "#5678", customer: "Maria Silva", total: "R$ 120,00", status: OrderStatus::Completed, date: "15/04/2023" },
    RecentOrder { id: "#5679", customer: "João Santos", total: "R$ 89,90", status: OrderStatus::Processing, date: "15/04/2023" },
    RecentOrder { id: "#5680", customer: "Ana Oliveira", total: "R$ 250,75", status: OrderStatus::Completed, date: "14/04/2023" },
    RecentOrder { id: "#5681", customer: "Carlos Pereira", total: "R$ 62,50", status: OrderStatus::Completed, date: "14/04/2023" },
    RecentOrder { id: "#5682", customer: "Luciana Costa", total: "R$ 175,00", status: OrderStatus::Cancelled, date: "13/04/2023" },
];

//! Customer directory provider: the static customers available for
//! lookup on the point-of-sale screen. Read-only within a session.

use contracts::domain::a002_customer::Customer;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;

static DIRECTORY: Lazy<Vec<Customer>> = Lazy::new(|| {
    vec![
        Customer::new(1, "C001", "João da Silva", "joao@email.com", "(11) 98765-4321")
            .with_profile("São Paulo", "10/01/2023", "12/04/2023", Decimal::new(1530_40, 2), true),
        Customer::new(2, "C002", "Maria Oliveira", "maria@email.com", "(11) 91234-5678")
            .with_profile("São Paulo", "22/02/2023", "08/04/2023", Decimal::new(980_00, 2), true),
        Customer::new(3, "C003", "Pedro Santos", "pedro@email.com", "(11) 92345-6789")
            .with_profile("Campinas", "05/03/2023", "01/04/2023", Decimal::new(420_75, 2), true),
    ]
});

/// The full point-of-sale customer directory.
pub fn all() -> &'static [Customer] {
    &DIRECTORY
}

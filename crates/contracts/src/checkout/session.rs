//! Checkout session for a single point-of-sale transaction.
//!
//! The session is a plain state container with no UI or async machinery:
//! the screen that owns it wraps it in a signal and drives the simulated
//! payment delay itself. Every guard violation comes back as a
//! [`CheckoutError`] so the caller can surface it as a toast; the session
//! state is left untouched on refusal.

use crate::domain::a001_product::{self, Product, ProductId};
use crate::domain::a002_customer::Customer;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One product entry in the in-progress sale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub code: String,
    pub name: String,
    pub price: Decimal,
    /// Always >= 1; a decrement below 1 is refused, the line stays.
    pub quantity: u32,
}

impl CartLine {
    fn from_product(product: &Product) -> Self {
        Self {
            product_id: product.id,
            code: product.code.clone(),
            name: product.name.clone(),
            price: product.price,
            quantity: 1,
        }
    }

    /// Line total: price × quantity.
    pub fn total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }
}

/// Stage of the checkout workflow.
///
/// Transitions are linear: `Cart → Payment → Complete`, with `Payment →
/// Cart` (cancel) and `Complete → Cart` (new sale) as the only ways back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CheckoutPhase {
    #[default]
    Cart,
    Payment,
    Complete,
}

/// Accepted payment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    CreditCard,
    DebitCard,
    Cash,
    Pix,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::Cash,
        PaymentMethod::Pix,
    ];

    /// Display label (pt-BR)
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Cartão de Crédito",
            PaymentMethod::DebitCard => "Cartão de Débito",
            PaymentMethod::Cash => "Dinheiro",
            PaymentMethod::Pix => "PIX",
        }
    }
}

/// Guard violations. All are recoverable: the session state is unchanged
/// when one is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CheckoutError {
    #[error("carrinho vazio")]
    EmptyCart,
    #[error("nenhum método de pagamento selecionado")]
    NoPaymentMethod,
    #[error("produto com código {code} não encontrado")]
    ProductNotFound { code: String },
    #[error("pagamento já em processamento")]
    PaymentInFlight,
}

/// Mutable state of one in-progress sale, from cart building to
/// completion. Owned exclusively by the screen that created it; reset via
/// [`CheckoutSession::start_new_sale`], never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Cart lines in insertion order; never re-sorted.
    pub lines: Vec<CartLine>,
    pub customer: Option<Customer>,
    pub phase: CheckoutPhase,
    pub payment_method: Option<PaymentMethod>,
    /// Set between `begin_payment` and `complete_payment`; blocks a second
    /// submission while the simulated processing runs.
    pub payment_in_flight: bool,
}

impl CheckoutSession {
    pub fn new() -> Self {
        Self::default()
    }

    // ------------------------------------------------------------------
    // Cart building
    // ------------------------------------------------------------------

    /// Add a product to the cart: increments the existing line's quantity,
    /// or appends a new line with quantity 1. Stock availability is not
    /// checked.
    pub fn add_product(&mut self, product: &Product) {
        match self.lines.iter_mut().find(|l| l.product_id == product.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine::from_product(product)),
        }
    }

    /// Look a product up by exact code in `catalog` and add it to the
    /// cart. Returns the matched product so the caller can name it in the
    /// confirmation message.
    pub fn add_product_by_code<'a>(
        &mut self,
        catalog: &'a [Product],
        code: &str,
    ) -> Result<&'a Product, CheckoutError> {
        let product =
            a001_product::aggregate::find_by_code(catalog, code).ok_or_else(|| {
                CheckoutError::ProductNotFound {
                    code: code.to_string(),
                }
            })?;
        self.add_product(product);
        Ok(product)
    }

    /// Replace a line's quantity. A target below 1 is a no-op: the line is
    /// kept at its current quantity and is not removed.
    pub fn update_quantity(&mut self, product_id: ProductId, new_quantity: u32) {
        if new_quantity < 1 {
            return;
        }
        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product_id) {
            line.quantity = new_quantity;
        }
    }

    /// Delete a line unconditionally.
    pub fn remove_line(&mut self, product_id: ProductId) {
        self.lines.retain(|l| l.product_id != product_id);
    }

    /// Attach a customer, replacing any previous selection.
    pub fn attach_customer(&mut self, customer: Customer) {
        self.customer = Some(customer);
    }

    /// Clear the customer selection.
    pub fn detach_customer(&mut self) {
        self.customer = None;
    }

    /// Sum of price × quantity over all lines. Discounts are not modeled;
    /// the displayed discount is always zero.
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::total).sum()
    }

    pub fn item_count(&self) -> usize {
        self.lines.len()
    }

    // ------------------------------------------------------------------
    // Phase transitions
    // ------------------------------------------------------------------

    /// `Cart → Payment`. Refused with [`CheckoutError::EmptyCart`] when no
    /// line exists; the phase stays `Cart`.
    pub fn begin_checkout(&mut self) -> Result<(), CheckoutError> {
        if self.lines.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        self.phase = CheckoutPhase::Payment;
        Ok(())
    }

    /// `Payment → Cart`, clearing the selected payment method.
    pub fn cancel_checkout(&mut self) {
        self.phase = CheckoutPhase::Cart;
        self.payment_method = None;
    }

    /// Record the chosen method. Does not change phase; ignored outside
    /// the `Payment` phase.
    pub fn select_payment_method(&mut self, method: PaymentMethod) {
        if self.phase == CheckoutPhase::Payment {
            self.payment_method = Some(method);
        }
    }

    /// Start the payment submission. Guards: a method must be selected
    /// and no submission may already be in flight. On success the busy
    /// flag is set; the caller runs the simulated processing delay and
    /// then calls [`CheckoutSession::complete_payment`].
    pub fn begin_payment(&mut self) -> Result<(), CheckoutError> {
        if self.payment_in_flight {
            return Err(CheckoutError::PaymentInFlight);
        }
        if self.payment_method.is_none() {
            return Err(CheckoutError::NoPaymentMethod);
        }
        self.payment_in_flight = true;
        Ok(())
    }

    /// Finish the payment submission: `Payment → Complete`.
    pub fn complete_payment(&mut self) {
        self.payment_in_flight = false;
        self.phase = CheckoutPhase::Complete;
    }

    /// Reset to the initial empty state (`Cart` phase, no lines, no
    /// customer, no method). Always succeeds, from any phase.
    pub fn start_new_sale(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn catalog() -> Vec<Product> {
        vec![
            Product::new(1, "P001", "Notebook Acer Aspire 5", dec!(3299.90), 15),
            Product::new(2, "P002", "Monitor Dell 24\"", dec!(999.90), 23),
            Product::new(3, "P003", "Mouse Logitech MX Master", dec!(349.90), 42),
        ]
    }

    fn customer() -> Customer {
        Customer::new(1, "C001", "João da Silva", "joao@email.com", "(11) 98765-4321")
    }

    #[test]
    fn repeated_add_increments_single_line() {
        let catalog = catalog();
        let mut session = CheckoutSession::new();
        for _ in 0..5 {
            session.add_product(&catalog[0]);
        }
        assert_eq!(session.lines.len(), 1);
        assert_eq!(session.lines[0].quantity, 5);
    }

    #[test]
    fn lines_keep_insertion_order() {
        let catalog = catalog();
        let mut session = CheckoutSession::new();
        session.add_product(&catalog[1]);
        session.add_product(&catalog[0]);
        session.add_product(&catalog[1]);
        let codes: Vec<&str> = session.lines.iter().map(|l| l.code.as_str()).collect();
        assert_eq!(codes, vec!["P002", "P001"]);
    }

    #[test]
    fn subtotal_is_sum_of_line_totals() {
        let catalog = catalog();
        let mut session = CheckoutSession::new();
        session.add_product(&catalog[0]);
        session.add_product(&catalog[1]);
        session.update_quantity(catalog[1].id, 3);
        assert_eq!(session.subtotal(), dec!(3299.90) + dec!(999.90) * dec!(3));
    }

    #[test]
    fn add_by_code_twice_yields_one_line_quantity_two() {
        let catalog = catalog();
        let mut session = CheckoutSession::new();
        session.add_product_by_code(&catalog, "P001").unwrap();
        session.add_product_by_code(&catalog, "P001").unwrap();
        assert_eq!(session.lines.len(), 1);
        assert_eq!(session.lines[0].quantity, 2);
        assert_eq!(session.subtotal(), dec!(6599.80));
    }

    #[test]
    fn add_by_unknown_code_leaves_cart_unchanged() {
        let catalog = catalog();
        let mut session = CheckoutSession::new();
        let err = session.add_product_by_code(&catalog, "ZZZZ").unwrap_err();
        assert_eq!(
            err,
            CheckoutError::ProductNotFound {
                code: "ZZZZ".to_string()
            }
        );
        assert!(session.lines.is_empty());
        assert_eq!(session.subtotal(), Decimal::ZERO);
    }

    #[test]
    fn decrement_below_one_is_a_noop() {
        let catalog = catalog();
        let mut session = CheckoutSession::new();
        session.add_product(&catalog[0]);
        session.update_quantity(catalog[0].id, 0);
        assert_eq!(session.lines.len(), 1);
        assert_eq!(session.lines[0].quantity, 1);
    }

    #[test]
    fn remove_line_deletes_unconditionally() {
        let catalog = catalog();
        let mut session = CheckoutSession::new();
        session.add_product(&catalog[0]);
        session.add_product(&catalog[1]);
        session.remove_line(catalog[0].id);
        assert_eq!(session.lines.len(), 1);
        assert_eq!(session.lines[0].code, "P002");
    }

    #[test]
    fn attach_replaces_previous_customer() {
        let mut session = CheckoutSession::new();
        session.attach_customer(customer());
        let other = Customer::new(2, "C002", "Maria Oliveira", "maria@email.com", "(11) 91234-5678");
        session.attach_customer(other.clone());
        assert_eq!(session.customer, Some(other));
        session.detach_customer();
        assert_eq!(session.customer, None);
    }

    #[test]
    fn begin_checkout_on_empty_cart_stays_in_cart_phase() {
        let mut session = CheckoutSession::new();
        assert_eq!(session.begin_checkout(), Err(CheckoutError::EmptyCart));
        assert_eq!(session.phase, CheckoutPhase::Cart);
    }

    #[test]
    fn cancel_checkout_clears_method() {
        let catalog = catalog();
        let mut session = CheckoutSession::new();
        session.add_product(&catalog[0]);
        session.begin_checkout().unwrap();
        session.select_payment_method(PaymentMethod::Cash);
        session.cancel_checkout();
        assert_eq!(session.phase, CheckoutPhase::Cart);
        assert_eq!(session.payment_method, None);
    }

    #[test]
    fn select_method_is_ignored_outside_payment_phase() {
        let mut session = CheckoutSession::new();
        session.select_payment_method(PaymentMethod::Pix);
        assert_eq!(session.payment_method, None);
    }

    #[test]
    fn submit_without_method_stays_in_payment_phase() {
        let catalog = catalog();
        let mut session = CheckoutSession::new();
        session.add_product(&catalog[0]);
        session.begin_checkout().unwrap();
        assert_eq!(session.begin_payment(), Err(CheckoutError::NoPaymentMethod));
        assert_eq!(session.phase, CheckoutPhase::Payment);
        assert!(!session.payment_in_flight);
    }

    #[test]
    fn double_submission_is_refused_while_in_flight() {
        let catalog = catalog();
        let mut session = CheckoutSession::new();
        session.add_product(&catalog[0]);
        session.begin_checkout().unwrap();
        session.select_payment_method(PaymentMethod::CreditCard);
        session.begin_payment().unwrap();
        assert_eq!(session.begin_payment(), Err(CheckoutError::PaymentInFlight));
        session.complete_payment();
        assert_eq!(session.phase, CheckoutPhase::Complete);
        assert!(!session.payment_in_flight);
    }

    #[test]
    fn pix_flow_reaches_complete() {
        let catalog = catalog();
        let mut session = CheckoutSession::new();
        session.add_product(&catalog[1]);
        assert_eq!(session.subtotal(), dec!(999.90));
        session.begin_checkout().unwrap();
        session.select_payment_method(PaymentMethod::Pix);
        session.begin_payment().unwrap();
        session.complete_payment();
        assert_eq!(session.phase, CheckoutPhase::Complete);
        assert_eq!(session.payment_method, Some(PaymentMethod::Pix));
    }

    #[test]
    fn start_new_sale_resets_from_any_phase() {
        let catalog = catalog();
        let mut session = CheckoutSession::new();
        session.add_product(&catalog[0]);
        session.attach_customer(customer());
        session.begin_checkout().unwrap();
        session.select_payment_method(PaymentMethod::DebitCard);
        session.begin_payment().unwrap();
        session.complete_payment();

        session.start_new_sale();
        assert_eq!(session, CheckoutSession::default());
        assert_eq!(session.phase, CheckoutPhase::Cart);
        assert!(session.lines.is_empty());
        assert_eq!(session.customer, None);
        assert_eq!(session.payment_method, None);
    }
}

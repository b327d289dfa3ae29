//! View-model for the point-of-sale screen.
//!
//! Wraps the checkout session in a signal, injects the static catalog and
//! customer directory, and reports every outcome to the notification
//! sink. The simulated payment delay runs here; the session itself only
//! tracks the in-flight flag.

use crate::shared::data::{catalog, directory};
use crate::shared::notify::ToastService;
use contracts::checkout::{CheckoutError, CheckoutSession, PaymentMethod};
use contracts::domain::a001_product::{Product, ProductId};
use contracts::domain::a002_customer::Customer;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use rust_decimal::Decimal;

/// Simulated payment processing time
const PAYMENT_DELAY_MS: u32 = 1500;

#[derive(Clone, Copy)]
pub struct PosViewModel {
    pub session: RwSignal<CheckoutSession>,
    /// Sequential sale number shown on the completion receipt
    pub sale_number: RwSignal<u32>,
    toasts: ToastService,
}

impl PosViewModel {
    pub fn new(toasts: ToastService) -> Self {
        Self {
            session: RwSignal::new(CheckoutSession::new()),
            sale_number: RwSignal::new(0),
            toasts,
        }
    }

    pub fn catalog(&self) -> &'static [Product] {
        catalog::all()
    }

    pub fn directory(&self) -> &'static [Customer] {
        directory::all()
    }

    pub fn subtotal(&self) -> Decimal {
        self.session.with(|s| s.subtotal())
    }

    pub fn add_product(&self, product: &Product) {
        self.session.update(|s| s.add_product(product));
        self.toasts.success(
            "Produto adicionado",
            &format!("{} foi adicionado ao carrinho.", product.name),
        );
    }

    /// Barcode entry path. Returns `true` when the code matched, so the
    /// caller can clear the input.
    pub fn add_product_by_code(&self, code: &str) -> bool {
        if code.is_empty() {
            return false;
        }
        match self
            .session
            .try_update(|s| s.add_product_by_code(catalog::all(), code))
        {
            Some(Ok(product)) => {
                self.toasts.success(
                    "Produto adicionado",
                    &format!("{} foi adicionado ao carrinho.", product.name),
                );
                true
            }
            Some(Err(CheckoutError::ProductNotFound { code })) => {
                self.toasts.error(
                    "Produto não encontrado",
                    &format!("Nenhum produto com o código {} foi encontrado.", code),
                );
                false
            }
            _ => false,
        }
    }

    pub fn update_quantity(&self, product_id: ProductId, new_quantity: u32) {
        self.session
            .update(|s| s.update_quantity(product_id, new_quantity));
    }

    pub fn remove_line(&self, product_id: ProductId) {
        self.session.update(|s| s.remove_line(product_id));
        self.toasts
            .info("Item removido", "O item foi removido do carrinho.");
    }

    pub fn attach_customer(&self, customer: &Customer) {
        self.session.update(|s| s.attach_customer(customer.clone()));
        self.toasts.success(
            "Cliente selecionado",
            &format!("{} foi selecionado para esta venda.", customer.name),
        );
    }

    pub fn detach_customer(&self) {
        self.session.update(|s| s.detach_customer());
        self.toasts
            .info("Cliente removido", "Cliente foi removido desta venda.");
    }

    pub fn begin_checkout(&self) {
        if let Some(Err(CheckoutError::EmptyCart)) =
            self.session.try_update(|s| s.begin_checkout())
        {
            self.toasts.error(
                "Carrinho vazio",
                "Adicione produtos ao carrinho antes de finalizar a venda.",
            );
        }
    }

    pub fn cancel_checkout(&self) {
        self.session.update(|s| s.cancel_checkout());
    }

    pub fn select_payment_method(&self, method: PaymentMethod) {
        self.session.update(|s| s.select_payment_method(method));
    }

    /// Submit the payment: guards run synchronously, then the simulated
    /// processing delay completes the sale. The submit button stays
    /// disabled while the session reports a payment in flight.
    pub fn submit_payment(&self) {
        let result = match self.session.try_update(|s| s.begin_payment()) {
            Some(result) => result,
            None => return,
        };

        match result {
            Ok(()) => {
                let vm = *self;
                spawn_local(async move {
                    TimeoutFuture::new(PAYMENT_DELAY_MS).await;
                    vm.session.update(|s| s.complete_payment());
                    vm.sale_number.update(|n| *n += 1);
                    vm.toasts.success(
                        "Pagamento realizado com sucesso!",
                        "A venda foi finalizada e o pagamento foi processado.",
                    );
                });
            }
            Err(CheckoutError::NoPaymentMethod) => {
                self.toasts.error(
                    "Selecione um método de pagamento",
                    "Por favor, selecione um método de pagamento para continuar.",
                );
            }
            // Refused re-entry; the busy button already tells the user.
            Err(_) => {}
        }
    }

    pub fn start_new_sale(&self) {
        self.session.update(|s| s.start_new_sale());
    }
}

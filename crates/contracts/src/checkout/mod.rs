pub mod session;

pub use session::{CartLine, CheckoutError, CheckoutPhase, CheckoutSession, PaymentMethod};

pub mod checkout;
pub mod domain;
pub mod shared;
pub mod system;

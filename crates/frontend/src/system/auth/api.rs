//! Mock authentication provider.
//!
//! The substitution seam for a real backend: swap the bodies here for
//! HTTP calls and the rest of the auth flow stays untouched. The mock
//! simulates a provider round-trip with a fixed delay and always
//! succeeds.

use contracts::system::auth::{AuthUser, Plan, RegisterForm};
use gloo_timers::future::TimeoutFuture;
use uuid::Uuid;

/// Simulated provider round-trip time
const AUTH_DELAY_MS: u32 = 1000;

fn new_user_id() -> String {
    format!("user-{}", Uuid::new_v4())
}

/// Sign in with email and password. Credentials are not validated by the
/// mock; the demo user comes back on the free plan.
pub async fn login(email: String, _password: String) -> Result<AuthUser, String> {
    TimeoutFuture::new(AUTH_DELAY_MS).await;

    Ok(AuthUser {
        id: new_user_id(),
        name: "Demo User".to_string(),
        email,
        business_name: "Demo Business".to_string(),
        plan: Plan::Free,
    })
}

/// Create an account from the registration form. The form is validated by
/// the caller; the mock accepts anything it receives.
pub async fn register(form: RegisterForm) -> Result<AuthUser, String> {
    TimeoutFuture::new(AUTH_DELAY_MS).await;

    Ok(AuthUser {
        id: new_user_id(),
        name: form.name,
        email: form.email,
        business_name: form.business_name,
        plan: form.plan,
    })
}

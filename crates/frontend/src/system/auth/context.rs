use contracts::system::auth::{AuthStatus, AuthUser, RegisterForm};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

/// Session context for the signed-in user.
///
/// One explicit object passed through Leptos context, with explicit init
/// (load-or-default from storage) and teardown (logout clears storage and
/// state). Starts `Pending` so guards can show a spinner instead of
/// flashing the login screen.
#[derive(Clone, Copy)]
pub struct AuthContext {
    pub status: RwSignal<AuthStatus>,
}

impl AuthContext {
    pub fn new() -> Self {
        Self {
            status: RwSignal::new(AuthStatus::Pending),
        }
    }

    /// Restore the stored session, or settle on `Anonymous`. Deferred to
    /// a task so the first paint shows the `Pending` state.
    pub fn init(&self) {
        let status = self.status;
        spawn_local(async move {
            match storage::load_session() {
                Some(user) => status.set(AuthStatus::Authenticated(user)),
                None => status.set(AuthStatus::Anonymous),
            }
        });
    }

    /// Sign in through the provider and persist the session.
    pub async fn login(&self, email: String, password: String) -> Result<AuthUser, String> {
        let user = api::login(email, password).await?;
        storage::save_session(&user);
        self.status.set(AuthStatus::Authenticated(user.clone()));
        Ok(user)
    }

    /// Register through the provider and persist the session.
    pub async fn register(&self, form: RegisterForm) -> Result<AuthUser, String> {
        let user = api::register(form).await?;
        storage::save_session(&user);
        self.status.set(AuthStatus::Authenticated(user.clone()));
        Ok(user)
    }

    /// Teardown: clear the stored session and drop to `Anonymous`.
    pub fn logout(&self) {
        storage::clear_session();
        self.status.set(AuthStatus::Anonymous);
    }
}

impl Default for AuthContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Hook to access the auth context
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().expect("AuthContext not found in component tree")
}

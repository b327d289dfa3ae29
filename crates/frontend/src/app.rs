use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use crate::shared::notify::{ToastHost, ToastService};
use crate::system::auth::context::AuthContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    provide_context(AppGlobalContext::new());

    // Toast service: the notification sink every screen reports into.
    provide_context(ToastService::new());

    // Auth context with explicit init: restores the stored session or
    // settles on Anonymous.
    let auth = AuthContext::new();
    auth.init();
    provide_context(auth);

    // ToastHost sits outside the routes so notifications show on the
    // auth screens as well.
    view! {
        <AppRoutes />
        <ToastHost />
    }
}

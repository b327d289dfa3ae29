use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::tabs::{tab_label_for_key, Tabs};
use crate::layout::Shell;
use crate::system::auth::context::use_auth;
use crate::system::pages::login::LoginPage;
use crate::system::pages::register::RegisterPage;
use contracts::system::auth::AuthStatus;
use leptos::prelude::*;

/// Which unauthenticated screen is showing.
#[derive(Clone, Copy, PartialEq, Eq)]
enum AuthScreen {
    Login,
    Register,
}

#[component]
fn MainLayout() -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Initialize router integration. This runs once when the component is
    // created; restores the tab from `?active=` if present.
    tabs_store.init_router_integration();

    // Fresh session with no URL state lands on the overview dashboard.
    if tabs_store.opened.with_untracked(|tabs| tabs.is_empty()) {
        tabs_store.open_tab("d400_overview", tab_label_for_key("d400_overview"));
    }

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=|| view! { <Tabs /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let auth = use_auth();
    let (screen, set_screen) = signal(AuthScreen::Login);

    view! {
        {move || match auth.status.get() {
            AuthStatus::Pending => view! {
                <div class="app-loading">
                    <div class="spinner"></div>
                </div>
            }
            .into_any(),
            AuthStatus::Anonymous => match screen.get() {
                AuthScreen::Login => view! {
                    <LoginPage on_register=Callback::new(move |_| set_screen.set(AuthScreen::Register)) />
                }
                .into_any(),
                AuthScreen::Register => view! {
                    <RegisterPage on_login=Callback::new(move |_| set_screen.set(AuthScreen::Login)) />
                }
                .into_any(),
            },
            AuthStatus::Authenticated(_) => view! { <MainLayout /> }.into_any(),
        }}
    }
}

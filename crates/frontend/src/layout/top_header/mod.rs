//! TopHeader component - application top navigation bar.
//!
//! Contains the sidebar toggle, the brand title and the signed-in user
//! block with logout.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::system::auth::context::use_auth;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let auth = use_auth();

    let toggle_sidebar = move |_| {
        ctx.toggle_left();
    };

    let logout = move |_| {
        auth.logout();
    };

    let is_sidebar_visible = move || ctx.left_open.get();

    let user_name = move || {
        auth.status
            .get()
            .user()
            .map(|u| u.name.clone())
            .unwrap_or_else(|| "Usuário".to_string())
    };

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_sidebar
                    title=move || if is_sidebar_visible() { "Ocultar navegação" } else { "Mostrar navegação" }
                >
                    {move || if is_sidebar_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                <span class="top-header__title">"VendaHub"</span>
            </div>

            <div class="top-header__actions">
                <div class="top-header__user">
                    {icon("user")}
                    <span>{user_name}</span>
                </div>

                <button class="top-header__icon-btn" on:click=logout title="Sair">
                    {icon("log-out")}
                </button>
            </div>
        </div>
    }
}

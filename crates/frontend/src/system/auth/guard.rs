use contracts::system::policy::{plan_allows, Feature};
use leptos::prelude::*;

use super::context::use_auth;

/// Component that requires the current plan to allow a feature.
/// Shows an upgrade notice instead of the children when it does not.
#[component]
pub fn RequirePlan(feature: Feature, children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();

    view! {
        <Show
            when=move || {
                auth.status
                    .get()
                    .user()
                    .map(|u| plan_allows(u.plan, feature))
                    .unwrap_or(false)
            }
            fallback=|| view! {
                <div class="plan-notice">
                    <h3>"Recurso indisponível no seu plano"</h3>
                    <p>"Faça upgrade para o Plano Padrão ou Pro para emitir notas fiscais."</p>
                </div>
            }
        >
            {children()}
        </Show>
    }
}
